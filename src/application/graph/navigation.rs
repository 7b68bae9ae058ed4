use crate::application::ports::ui_callbacks::LinkClickHandler;

/// Forwards a rendered wiki-link click to the host. The href is treated as a
/// note id as-is; resolving it is the handler's job.
pub fn handle_wiki_link_click<H>(href: Option<&str>, on_link_click: &H)
where
    H: LinkClickHandler + ?Sized,
{
    match href {
        Some(h) if !h.is_empty() => on_link_click.on_link_click(h),
        _ => {}
    }
}
