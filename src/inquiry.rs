//! Contact-form inquiry and the WhatsApp link it turns into.

use crate::config;

/// Trimmed contact-form values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inquiry {
    pub local: String,
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub mensaje: String,
}

impl Inquiry {
    pub fn new(local: &str, nombre: &str, telefono: &str, email: &str, mensaje: &str) -> Self {
        Self {
            local: local.trim().to_string(),
            nombre: nombre.trim().to_string(),
            telefono: telefono.trim().to_string(),
            email: email.trim().to_string(),
            mensaje: mensaje.trim().to_string(),
        }
    }

    /// Local, name and phone are required; email and message are not.
    pub fn is_complete(&self) -> bool {
        !self.local.is_empty() && !self.nombre.is_empty() && !self.telefono.is_empty()
    }

    /// The chat message, or `None` when a required field is missing.
    pub fn message(&self, domain: &str) -> Option<String> {
        if !self.is_complete() {
            return None;
        }

        let mut lines = vec![
            "👋 *Hola, me interesa ComidApp*".to_string(),
            String::new(),
            format!("🍽️ *Local:* {}", self.local),
            format!("👤 *Nombre:* {}", self.nombre),
            format!("📱 *WhatsApp:* {}", self.telefono),
        ];
        if !self.email.is_empty() {
            lines.push(format!("📧 *Email:* {}", self.email));
        }
        if !self.mensaje.is_empty() {
            lines.push(format!("💬 *Mensaje:* {}", self.mensaje));
        }
        lines.push(String::new());
        lines.push(format!("— Enviado desde {}", domain));

        Some(lines.join("\n"))
    }

    pub fn whatsapp_url(&self) -> Option<String> {
        self.message(config::site_domain())
            .map(|message| whatsapp_link(config::whatsapp_number(), &message))
    }
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe_x() -> Inquiry {
        Inquiry::new("Café X", "Ana", "+56911112222", "", "")
    }

    #[test]
    fn optional_lines_are_left_out() {
        let message = cafe_x().message("comidapp.cl").unwrap();
        assert_eq!(
            message,
            "👋 *Hola, me interesa ComidApp*\n\n🍽️ *Local:* Café X\n👤 *Nombre:* Ana\n📱 *WhatsApp:* +56911112222\n\n— Enviado desde comidapp.cl"
        );
        assert!(!message.contains("Email"));
        assert!(!message.contains("Mensaje"));
    }

    #[test]
    fn optional_lines_follow_the_phone() {
        let inquiry = Inquiry::new("Sushi Go", "Luis", "912345678", "luis@sushi.cl", "¿Tienen demo?");
        let message = inquiry.message("comidapp.cl").unwrap();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[5], "📧 *Email:* luis@sushi.cl");
        assert_eq!(lines[6], "💬 *Mensaje:* ¿Tienen demo?");
        assert_eq!(lines[7], "");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn link_text_decodes_to_the_message() {
        let message = cafe_x().message("comidapp.cl").unwrap();
        let link = whatsapp_link("56912345678", &message);
        let encoded = link
            .strip_prefix("https://wa.me/56912345678?text=")
            .unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }

    #[test]
    fn missing_required_field_gives_no_link() {
        for inquiry in [
            Inquiry::new("", "Ana", "+56911112222", "a@b.cl", "hola"),
            Inquiry::new("Café X", "   ", "+56911112222", "", ""),
            Inquiry::new("Café X", "Ana", "", "", ""),
        ] {
            assert!(!inquiry.is_complete());
            assert_eq!(inquiry.message("comidapp.cl"), None);
            assert_eq!(inquiry.whatsapp_url(), None);
        }
    }

    #[test]
    fn fields_are_trimmed() {
        let inquiry = Inquiry::new("  Café X ", "\tAna\n", " +569 ", "  ", " ");
        assert_eq!(inquiry.local, "Café X");
        assert_eq!(inquiry.nombre, "Ana");
        assert_eq!(inquiry.telefono, "+569");
        assert!(inquiry.email.is_empty());
        assert!(inquiry.mensaje.is_empty());
    }

    #[test]
    fn url_goes_to_the_configured_number() {
        let url = cafe_x().whatsapp_url().unwrap();
        assert!(url.starts_with(&format!("https://wa.me/{}?text=", config::whatsapp_number())));
    }
}
