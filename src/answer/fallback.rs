use crate::answer::prompt::excerpt;
use crate::relevance::ScoredPage;

pub const UNAVAILABLE_MESSAGE: &str =
    "متأسفانه در حال حاضر امکان پاسخگویی نیست. لطفا با شماره 021-12345678 تماس بگیرید.";

/// Answer used when the completion provider cannot be reached: a quote of
/// the best page if there is one, otherwise a phone number.
pub fn fallback_answer(context: &[ScoredPage], excerpt_chars: usize) -> String {
    let Some(top) = context.first() else {
        return UNAVAILABLE_MESSAGE.to_string();
    };

    format!(
        "بر اساس اطلاعات سایت:\n\n{}\n{}...\n\nبرای اطلاعات بیشتر به صفحه {} مراجعه کنید.",
        top.page.title,
        excerpt(&top.page.body_text, excerpt_chars),
        top.page.url
    )
}
