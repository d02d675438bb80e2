// Placeholder until the business line is provisioned.
const DEFAULT_WHATSAPP_NUMBER: &str = "56912345678";

/// Recipient of contact-form messages, digits only (country code first).
pub fn whatsapp_number() -> &'static str {
    match option_env!("COMIDAPP_WHATSAPP_NUMBER") {
        Some(number) if !number.trim().is_empty() => number,
        _ => DEFAULT_WHATSAPP_NUMBER,
    }
}

pub fn site_domain() -> &'static str {
    "comidapp.cl"
}

/// The hero trust strip only unobserves itself unless this is switched on at build time.
pub fn animate_trust_counters() -> bool {
    flag_enabled(option_env!("COMIDAPP_TRUST_COUNTERS"))
}

/// Build flags count as on only for `1` or `true`.
fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_needs_an_explicit_yes() {
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some("true")));
        assert!(flag_enabled(Some(" TRUE ")));
        assert!(!flag_enabled(Some("0")));
        assert!(!flag_enabled(Some("false")));
        assert!(!flag_enabled(Some("")));
        assert!(!flag_enabled(None));
    }
}
