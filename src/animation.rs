//! Timing and easing shared by the decorative animations.

/// Gap between consecutive items of a staggered cascade.
pub const STAGGER_STEP_MS: u32 = 80;
/// Chart bars wait this long after page load before growing.
pub const BAR_BASE_DELAY_MS: u32 = 800;
pub const BAR_TRANSITION: &str = "height 0.6s cubic-bezier(0.34, 1.56, 0.64, 1)";
pub const COUNTER_DURATION_MS: f64 = 1200.0;
pub const NOTIF_REPLAY_MS: u32 = 8000;

pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

pub fn bar_delay(index: usize) -> u32 {
    BAR_BASE_DELAY_MS + stagger_delay(index)
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Progress of an animation that started at `start` (ms), clamped to `[0, 1]`.
pub fn progress(start: f64, now: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - start) / duration).clamp(0.0, 1.0)
}

/// Value a counter should show at `progress`.
pub fn counter_value(target: f64, progress: f64) -> i64 {
    (ease_out_cubic(progress) * target).round() as i64
}

/// Counter text split around its number, e.g. `"+1.200"` is `"+"`, 1200, `""`
/// with `.` thousands grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub value: u64,
    pub suffix: String,
    grouped: bool,
}

impl CounterText {
    /// `None` unless the text holds exactly one plain number (`"24/7"` does not).
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let (prefix, rest) = text.split_at(start);
        let run_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let run = rest[..run_len].trim_end_matches('.');
        let suffix = &rest[run.len()..];
        if suffix.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let groups: Vec<&str> = run.split('.').collect();
        let (head, tail) = groups.split_first()?;
        if groups.len() > 1 && (head.len() > 3 || tail.iter().any(|g| g.len() != 3)) {
            return None;
        }
        let value = groups.concat().parse().ok()?;

        Some(Self {
            prefix: prefix.to_string(),
            value,
            suffix: suffix.to_string(),
            grouped: groups.len() > 1,
        })
    }

    pub fn target(&self) -> f64 {
        self.value as f64
    }

    /// The text with `value` in place of the original number.
    pub fn render(&self, value: i64) -> String {
        let digits = value.max(0).to_string();
        let number = if self.grouped {
            group_thousands(&digits)
        } else {
            digits
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Delay and final height for each chart bar, in page order.
pub fn bar_plan(declared_heights: Vec<String>) -> Vec<(u32, String)> {
    declared_heights
        .into_iter()
        .enumerate()
        .map(|(index, height)| (bar_delay(index), height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn easing_never_goes_backwards() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = ease_out_cubic(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn counter_settles_on_target_after_duration() {
        let p = progress(1000.0, 1000.0 + COUNTER_DURATION_MS * 3.0, COUNTER_DURATION_MS);
        assert_eq!(p, 1.0);
        assert_eq!(counter_value(500.0, p), 500);
        assert_eq!(counter_value(500.0, progress(10.0, 10.0, COUNTER_DURATION_MS)), 0);
    }

    #[test]
    fn delays() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 240);
        assert_eq!(bar_delay(0), 800);
        assert_eq!(bar_delay(5), 1200);
    }

    #[test]
    fn counter_ends_on_original_text() {
        for text in ["+1.200", "98%", "350", "12.500.000 pedidos"] {
            let counter = CounterText::parse(text).unwrap();
            assert_eq!(counter.render(counter_value(counter.target(), 1.0)), text);
        }
    }

    #[test]
    fn counter_keeps_decoration_while_counting() {
        let counter = CounterText::parse("+1.200").unwrap();
        assert_eq!(counter.value, 1200);
        assert_eq!(counter.render(0), "+0");
        assert_eq!(counter.render(875), "+875");
        assert_eq!(counter.render(1050), "+1.050");
    }

    #[test]
    fn counter_skips_text_that_is_not_one_number() {
        assert_eq!(CounterText::parse("24/7"), None);
        assert_eq!(CounterText::parse("sin números"), None);
        assert_eq!(CounterText::parse("1.2"), None);
    }

    #[test]
    fn bars_grow_to_their_declared_height() {
        let declared = vec!["38%".to_string(), "52%".to_string(), String::new(), "82%".to_string()];
        let plan = bar_plan(declared.clone());
        let heights: Vec<String> = plan.iter().map(|(_, h)| h.clone()).collect();
        assert_eq!(heights, declared);
        let delays: Vec<u32> = plan.iter().map(|(d, _)| *d).collect();
        assert_eq!(delays, vec![800, 880, 960, 1040]);
    }
}
