use crate::prelude::{println, *};
use bookshelf_core::pagination::{activate, ControlKind, PageControl, PaginationState};
use colored::Colorize;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, clap::Args, Clone)]
pub struct PagesOptions {
    /// Page currently shown (1-indexed)
    #[arg(short, long, default_value = "1")]
    current: usize,

    /// Total number of pages
    #[arg(short, long)]
    total: usize,

    /// Activate a control (prev, next or a page number) and print the page requested
    #[arg(short, long)]
    goto: Option<PageTarget>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Control picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Previous,
    Page(usize),
    Next,
}

impl FromStr for PageTarget {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "prev" | "previous" => Ok(PageTarget::Previous),
            "next" => Ok(PageTarget::Next),
            other => other
                .parse::<usize>()
                .map(PageTarget::Page)
                .map_err(|_| Error::InvalidPageTarget(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PagesOutput {
    pub state: PaginationState,
    pub controls: Vec<PageControl>,
    pub requested_page: Option<usize>,
}

pub fn run(options: PagesOptions, global: crate::Global) -> Result<()> {
    let state = PaginationState::new(options.current, options.total);
    let controls = state.controls();
    log::debug!("Controls: {}", format_controls(&controls));

    if global.verbose {
        println!(
            "Rendering {} controls for page {} of {}",
            controls.len(),
            state.current_page,
            state.total_pages
        );
    }

    let requested_page = options
        .goto
        .map(|target| request_page(&controls, target, state.total_pages))
        .transpose()?;

    let output = PagesOutput {
        state,
        controls,
        requested_page,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.controls.is_empty() {
        println!("Single page, no controls to show.");
    } else {
        println!("{}", colorize_controls(&output.controls));
    }

    if let Some(page) = output.requested_page {
        println!("Navigate to page {}", page.to_string().bold());
    }

    Ok(())
}

/// Find the control matching `target` and activate it.
fn request_page(controls: &[PageControl], target: PageTarget, total_pages: usize) -> Result<usize> {
    let control = find_control(controls, target).ok_or_else(|| match target {
        PageTarget::Page(page) => eyre!(Error::NoSuchPage(page)),
        _ => eyre!("No page controls are rendered for a single page"),
    })?;

    Ok(activate(control, total_pages, |page| {
        log::debug!("Page {page} requested from {:?}", control.kind);
    }))
}

fn find_control(controls: &[PageControl], target: PageTarget) -> Option<&PageControl> {
    controls.iter().find(|control| match (target, control.kind) {
        (PageTarget::Previous, ControlKind::Previous) => true,
        (PageTarget::Next, ControlKind::Next) => true,
        (PageTarget::Page(wanted), ControlKind::Page(page)) => wanted == page,
        _ => false,
    })
}

/// Plain-text rendering of a control sequence.
///
/// The active page is wrapped in brackets and disabled controls in parentheses,
/// e.g. `(«) [1] 2 3 »`.
pub fn format_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(control_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn control_token(control: &PageControl) -> String {
    let label = control.label();
    if control.active {
        format!("[{label}]")
    } else if control.disabled {
        format!("({label})")
    } else {
        label
    }
}

/// Terminal rendering of a control sequence with the active page highlighted.
pub fn colorize_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| {
            let token = control_token(control);
            if control.active {
                token.green().bold().to_string()
            } else if control.disabled {
                token.dimmed().to_string()
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::pagination::render_pagination;

    #[test]
    fn test_format_controls() {
        let controls = render_pagination(1, 3);
        assert_eq!(format_controls(&controls), "(«) [1] 2 3 »");

        let controls = render_pagination(3, 3);
        assert_eq!(format_controls(&controls), "« 1 2 [3] (»)");
    }

    #[test]
    fn test_format_controls_empty() {
        assert_eq!(format_controls(&render_pagination(1, 1)), "");
    }

    #[test]
    fn test_parse_page_target() {
        assert_eq!("prev".parse::<PageTarget>().unwrap(), PageTarget::Previous);
        assert_eq!("next".parse::<PageTarget>().unwrap(), PageTarget::Next);
        assert_eq!("4".parse::<PageTarget>().unwrap(), PageTarget::Page(4));
        assert!("last".parse::<PageTarget>().is_err());
    }

    #[test]
    fn test_request_page_clamps_previous_on_first_page() {
        let controls = render_pagination(1, 3);
        assert_eq!(request_page(&controls, PageTarget::Previous, 3).unwrap(), 1);
    }

    #[test]
    fn test_request_page_clamps_next_on_last_page() {
        let controls = render_pagination(3, 3);
        assert_eq!(request_page(&controls, PageTarget::Next, 3).unwrap(), 3);
    }

    #[test]
    fn test_request_page_number() {
        let controls = render_pagination(1, 3);
        assert_eq!(request_page(&controls, PageTarget::Page(2), 3).unwrap(), 2);
        assert!(request_page(&controls, PageTarget::Page(7), 3).is_err());
    }

    #[test]
    fn test_request_page_without_controls() {
        let controls = render_pagination(1, 1);
        assert!(request_page(&controls, PageTarget::Next, 1).is_err());
    }
}
