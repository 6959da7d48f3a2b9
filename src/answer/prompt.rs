use crate::relevance::ScoredPage;

pub const SYSTEM_PROMPT: &str = "شما دستیار هوشمند سایت \"شرکت نوآوران دیجیتال\" هستید.
شخصیت: دوستانه، حرفه‌ای و کمک‌کننده
زبان: فارسی روان و رسمی-صمیمی

وظایف شما:
1. پاسخ به سوالات کاربران به صورت دقیق و مفید
2. معرفی محصولات و خدمات شرکت در صورت نیاز
3. راهنمایی کاربران برای استفاده از سایت";

const CONTEXT_DIVIDER: &str = "\n\n---\n\n";

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// The user turn: the bare question, or the question wrapped around page
/// excerpts when there is context.
pub fn build_user_prompt(question: &str, context: &[ScoredPage], excerpt_chars: usize) -> String {
    if context.is_empty() {
        return question.to_string();
    }

    let pages = context
        .iter()
        .map(|scored| {
            format!(
                "📄 {}:\n{}",
                scored.page.title,
                excerpt(&scored.page.body_text, excerpt_chars)
            )
        })
        .collect::<Vec<_>>()
        .join(CONTEXT_DIVIDER);

    format!(
        "بر اساس اطلاعات زیر از سایت، به این سوال پاسخ دهید:\n\nسوال: {}\n\nاطلاعات سایت:\n{}\n\nلطفا پاسخی دقیق و مرتبط با محتوای سایت ارائه دهید.",
        question, pages
    )
}
