use scraper::ElementRef;

/// Nearest element named `name` that follows `from` in document order.
///
/// The search covers `from`'s own subtree first, then each following
/// sibling's subtree, then the following siblings of each ancestor. This
/// matches how the listing pages pair an icon's wrapper with the list or
/// heading rendered after it.
pub fn following_element<'a>(from: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    for descendant in from.descendants().skip(1) {
        if let Some(element) = ElementRef::wrap(descendant) {
            if element.value().name() == name {
                return Some(element);
            }
        }
    }

    let mut current = *from;
    loop {
        for sibling in current.next_siblings() {
            for descendant in sibling.descendants() {
                if let Some(element) = ElementRef::wrap(descendant) {
                    if element.value().name() == name {
                        return Some(element);
                    }
                }
            }
        }
        current = current.parent()?;
    }
}
