pub const TRIAL_REPLY: &str = "Awesome! To start your free trial, we'll need to check availability. Please reply with the date and time you prefer (e.g., 'Wed 3pm').";
pub const BOOKING_REPLY: &str =
    "Got it. To book, please reply with the service name and preferred date/time.";
pub const GREETING_REPLY: &str = "Hello! I'm QuickReserve's automated assistant. Reply 'TRIAL' to start your free trial, or 'HELP' for human assistance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    TrialOffer,
    BookingInstructions,
    Greeting,
}

impl ReplyKind {
    pub fn text(&self) -> &'static str {
        match self {
            ReplyKind::TrialOffer => TRIAL_REPLY,
            ReplyKind::BookingInstructions => BOOKING_REPLY,
            ReplyKind::Greeting => GREETING_REPLY,
        }
    }
}

/// Case-insensitive substring match; trial/free wins over book.
pub fn classify(text: &str) -> ReplyKind {
    let normalized = text.trim().to_lowercase();
    if normalized.contains("trial") || normalized.contains("free") {
        ReplyKind::TrialOffer
    } else if normalized.contains("book") {
        ReplyKind::BookingInstructions
    } else {
        ReplyKind::Greeting
    }
}
