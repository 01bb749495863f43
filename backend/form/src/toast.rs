use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::notify::{Notification, NotificationKind};

/// Terminal rendering of notifications: a spinner while loading, one line once settled.
#[derive(Default)]
pub struct Toaster {
    spinner: Option<ProgressBar>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Loading => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner());
                spinner.set_message(notification.text);
                spinner.enable_steady_tick(Duration::from_millis(100));

                self.spinner = Some(spinner);
            }
            NotificationKind::Success => {
                self.clear();
                println!("✔ {}", notification.text);
            }
            NotificationKind::Error => {
                self.clear();
                eprintln!("✖ {}", notification.text);
            }
        }
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
