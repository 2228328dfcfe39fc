//! WhatsApp greeting sent when a follow-up starts.

use super::model::Visitor;
use super::search::digits;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

const MISSING_DATE: &str = "data não informada";

/// Visit date as `dd/mm/yyyy`, or a placeholder when missing or unparseable.
pub fn display_visit_date(visitor: &Visitor) -> String {
    visitor
        .visit_day()
        .map(|day| day.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING_DATE.to_string())
}

pub fn greeting_message(visitor: &Visitor) -> String {
    format!(
        "Olá {}!\n\
         Aqui é da nossa igreja. Ficamos muito felizes com sua visita no dia {}.\n\
         Gostaríamos de manter contato e saber como foi sua experiência conosco.\n\
         Deus abençoe você e sua família!",
        visitor.name,
        display_visit_date(visitor)
    )
}

/// `https://wa.me/<digits>?text=<message>`, or `None` if the visitor has no
/// usable phone number.
pub fn whatsapp_link(visitor: &Visitor) -> Option<String> {
    let phone = digits(visitor.phone.as_deref()?);
    if phone.is_empty() {
        return None;
    }
    let message = greeting_message(visitor);
    let text = urlencoding::encode(&message);
    Some(format!("{WHATSAPP_BASE_URL}/{phone}?text={text}"))
}
