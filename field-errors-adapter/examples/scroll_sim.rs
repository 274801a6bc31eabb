// Example: a fake page that renders error wrappers during the flush, then scrolls to the first.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use field_errors::{Issue, flatten_errors};
use field_errors_adapter::{Document, ErrorScroller, ScrollBlock, ScrollIntoView};

struct Page {
    viewport: u64,
    scroll_y: Rc<Cell<u64>>,
    errors_at: RefCell<Vec<u64>>,
}

struct ErrorWrapper {
    top: u64,
    viewport: u64,
    scroll_y: Rc<Cell<u64>>,
}

impl Document for Page {
    type Element = ErrorWrapper;

    fn query_selector(&self, selector: &str) -> Option<ErrorWrapper> {
        if selector != ".error" {
            return None;
        }
        let top = *self.errors_at.borrow().first()?;
        Some(ErrorWrapper {
            top,
            viewport: self.viewport,
            scroll_y: Rc::clone(&self.scroll_y),
        })
    }
}

impl ScrollIntoView for ErrorWrapper {
    fn scroll_into_view(&self, block: ScrollBlock) {
        let y = match block {
            ScrollBlock::Center => self.top.saturating_sub(self.viewport / 2),
            _ => self.top,
        };
        self.scroll_y.set(y);
    }
}

fn main() {
    let page = Page {
        viewport: 600,
        scroll_y: Rc::new(Cell::new(0)),
        errors_at: RefCell::new(Vec::new()),
    };

    let issues = vec![
        Issue::new(["billing", "zip"], "Invalid ZIP code"),
        Issue::new(["terms"], "You must accept the terms"),
    ];
    let errors = flatten_errors(Some(issues.as_slice()));

    // Stands in for the framework flush: the template mounts one wrapper per field.
    let render = async {
        for (i, (field, messages)) in errors.iter().enumerate() {
            println!("render .error for {field}: {messages:?}");
            page.errors_at.borrow_mut().push(1_800 + i as u64 * 120);
        }
    };

    let scrolled =
        futures::executor::block_on(ErrorScroller::new().reveal(&errors, &page, render));
    println!("scrolled={scrolled} scroll_y={}", page.scroll_y.get());
}
