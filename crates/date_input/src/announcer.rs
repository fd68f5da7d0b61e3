use std::time::Duration;

use web_time::Instant;

/// How long an announcement stays up.
pub const ANNOUNCEMENT_DURATION: Duration = Duration::from_millis(100);

/// Announced when the selected day was moved to satisfy the constraints.
pub const RELOCATION_MESSAGE: &str = "Date changed!";

/// A single polite live-region slot.
///
/// A new announcement overwrites the previous one. The text clears itself once
/// [`ANNOUNCEMENT_DURATION`] has passed; hosts read it every frame with
/// [`Self::announcement_at`] and schedule a repaint after [`Self::remaining_at`].
#[derive(Clone, Debug, Default)]
pub struct Announcer {
    current: Option<Announcement>,
}

#[derive(Clone, Debug)]
struct Announcement {
    message: String,
    expires_at: Instant,
}

impl Announcer {
    pub fn announce(&mut self, message: impl Into<String>) {
        self.announce_at(message, Instant::now());
    }

    pub fn announce_at(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Announcement {
            message: message.into(),
            expires_at: now + ANNOUNCEMENT_DURATION,
        });
    }

    /// The current message, if it has not expired yet.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement_at(Instant::now())
    }

    pub fn announcement_at(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|announcement| now < announcement.expires_at)
            .map(|announcement| announcement.message.as_str())
    }

    /// Time until the current message clears, if one is showing.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .and_then(|announcement| announcement.expires_at.checked_duration_since(now))
            .filter(|remaining| !remaining.is_zero())
    }

    /// Drop an expired message.
    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.announcement_at(now).is_none() {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_after_delay() {
        let start = Instant::now();
        let mut announcer = Announcer::default();
        assert_eq!(announcer.announcement_at(start), None);

        announcer.announce_at(RELOCATION_MESSAGE, start);
        assert_eq!(announcer.announcement_at(start), Some(RELOCATION_MESSAGE));
        assert_eq!(announcer.remaining_at(start), Some(ANNOUNCEMENT_DURATION));

        let later = start + ANNOUNCEMENT_DURATION;
        assert_eq!(announcer.announcement_at(later), None);
        assert_eq!(announcer.remaining_at(later), None);

        announcer.clear_expired_at(later);
        assert_eq!(announcer.announcement_at(start), None);
    }

    #[test]
    fn second_announcement_overwrites_first() {
        let start = Instant::now();
        let mut announcer = Announcer::default();
        announcer.announce_at("first", start);
        announcer.announce_at("second", start + Duration::from_millis(50));

        let at = start + Duration::from_millis(120);
        assert_eq!(announcer.announcement_at(at), Some("second"));
    }
}
