use std::iter::once;

use payloads::{IMPORTANT_COUNT, INTERESTING_COUNT};

pub struct Question {
    pub number: usize,
    pub prompt: &'static str,
    pub count: usize,
}

pub const QUESTIONS: [Question; 3] = [
    Question {
        number: 1,
        prompt: "本课中你学到的3个最重要的知识点是什么？",
        count: IMPORTANT_COUNT,
    },
    Question {
        number: 2,
        prompt: "最感兴趣的2个知识点是什么？",
        count: INTERESTING_COUNT,
    },
    Question {
        number: 3,
        prompt: "最难懂的1个问题是什么？",
        count: 1,
    },
];

pub const DIFFICULT_PLACEHOLDER: &str = "请描述你遇到的难点";

/// One of the six text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Important(usize),
    Interesting(usize),
    Difficult,
}

impl FieldId {
    /// All inputs in the order they appear on the form.
    pub fn all() -> impl Iterator<Item = FieldId> {
        (0..IMPORTANT_COUNT)
            .map(FieldId::Important)
            .chain((0..INTERESTING_COUNT).map(FieldId::Interesting))
            .chain(once(FieldId::Difficult))
    }

    pub fn question(self) -> &'static Question {
        match self {
            FieldId::Important(_) => &QUESTIONS[0],
            FieldId::Interesting(_) => &QUESTIONS[1],
            FieldId::Difficult => &QUESTIONS[2],
        }
    }

    pub fn placeholder(self) -> String {
        match self {
            FieldId::Important(index) | FieldId::Interesting(index) => {
                format!("知识点 {}", index + 1)
            }
            FieldId::Difficult => DIFFICULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Question {
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::all().filter(move |id| id.question().number == self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let ids: Vec<FieldId> = FieldId::all().collect();
        assert_eq!(
            ids,
            vec![
                FieldId::Important(0),
                FieldId::Important(1),
                FieldId::Important(2),
                FieldId::Interesting(0),
                FieldId::Interesting(1),
                FieldId::Difficult,
            ]
        );
    }

    #[test]
    fn test_question_counts_match_fields() {
        for question in &QUESTIONS {
            assert_eq!(question.fields().count(), question.count);
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(FieldId::Important(0).placeholder(), "知识点 1");
        assert_eq!(FieldId::Interesting(1).placeholder(), "知识点 2");
        assert_eq!(FieldId::Difficult.placeholder(), "请描述你遇到的难点");
    }
}
