use scraper::ElementRef;

/// Elements whose text never reaches a page record.
const STRIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Text content of `element` with script and style content left out.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| STRIPPED_TAGS.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }
    out
}
