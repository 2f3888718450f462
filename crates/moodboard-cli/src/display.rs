//! Terminal rendering of messages and their sentiment

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::api::MessageResponse;

/// Sentiment bucket used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Mood {
    /// Accepts both named labels and raw model labels (LABEL_0..2)
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::to_lowercase).as_deref() {
            Some("positive") | Some("label_2") => Mood::Positive,
            Some("negative") | Some("label_0") => Mood::Negative,
            Some("neutral") | Some("label_1") => Mood::Neutral,
            _ => Mood::Unknown,
        }
    }

    fn text(self) -> &'static str {
        match self {
            Mood::Positive => "Positive 😊",
            Mood::Negative => "Negative 😔",
            Mood::Neutral => "Neutral 😐",
            Mood::Unknown => "Not analyzed",
        }
    }

    fn paint(self) -> ColoredString {
        match self {
            Mood::Positive => self.text().green(),
            Mood::Negative => self.text().red(),
            Mood::Neutral | Mood::Unknown => self.text().dimmed(),
        }
    }
}

/// `0.8734` -> `87.3%`
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Sentiment indicator line, e.g. `Positive 😊 (87.3%)`
pub fn sentiment_line(message: &MessageResponse) -> String {
    let mood = Mood::from_label(message.sentiment_label.as_deref());
    let head = match (mood, message.sentiment_label.as_deref()) {
        // Labels outside the known set are shown verbatim
        (Mood::Unknown, Some(label)) => label.dimmed().to_string(),
        _ => mood.paint().to_string(),
    };
    match message.sentiment_score {
        Some(score) if message.sentiment_label.is_some() => {
            format!("{} {}", head, format!("({})", format_score(score)).dimmed())
        }
        _ => head,
    }
}

pub fn print_message(message: &MessageResponse) {
    let sent_at = message.sent_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    println!(
        "{} {} {}",
        format!("#{}", message.id).dimmed(),
        message.nickname.cyan().bold(),
        sent_at.to_string().dimmed()
    );
    println!("  {}", message.content);
    println!("  {}", sentiment_line(message));
}
