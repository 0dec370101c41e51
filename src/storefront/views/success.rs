//! # Success View

use super::card::price_label;
use super::fragment::{update, Fragment, RedrawFlag, Tone};

#[derive(Debug)]
pub struct SuccessView {
    total: String,
    redraw: RedrawFlag,
}

impl SuccessView {
    pub fn new(redraw: RedrawFlag) -> Self {
        Self {
            total: String::new(),
            redraw,
        }
    }

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn set_total(&mut self, total: u64) {
        update(
            &mut self.total,
            format!("Charged {}", price_label(total)),
            &self.redraw,
        );
    }

    pub fn render(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.push("Order placed", Tone::Title);
        fragment.blank();
        fragment.push(self.total.clone(), Tone::Plain);
        fragment.blank();
        fragment.push("[ Back to shopping ]", Tone::Button);
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_total_should_describe_charge() {
        let mut view = SuccessView::new(RedrawFlag::new());

        view.set_total(2200);

        assert_eq!(view.total(), "Charged 2200 synapses");
        assert!(view.render().text().contains("Charged 2200 synapses"));
    }
}
