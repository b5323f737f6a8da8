use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_usage(&self, usage: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_usage(&self, usage: String) {
        eprint!("{usage}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::sync::mpsc;

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let (usage_tx, usage_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
            usage_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
            usage_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
        usage_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
            self.error_tx.send(None).unwrap();
            self.usage_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_error(&self, error: ParseError) {
            self.error_tx.send(Some(error.to_string())).unwrap();
        }

        fn print_usage(&self, usage: String) {
            self.usage_tx.send(Some(usage)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
        usage_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        fn drain(receiver: &mpsc::Receiver<Option<String>>) -> Option<String> {
            let mut parts = Vec::default();

            while let Some(part) = receiver.recv().unwrap() {
                parts.push(part);
            }

            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n"))
            }
        }

        /// Consume everything sent, once the sender has been dropped.
        pub(crate) fn consume(self) -> (Option<String>, Option<String>, Option<String>) {
            (
                Self::drain(&self.message_rx),
                Self::drain(&self.error_rx),
                Self::drain(&self.usage_rx),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, usage) = self.consume();
            assert_eq!(error, None);
            assert_eq!(usage, None);
            message.unwrap()
        }
    }
}
