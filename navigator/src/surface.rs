//! The presentation host, as seen by the navigator.
//!
//! Every method takes `&self`: hosts keep their own interior mutability
//! (Leptos signals in the browser, a `RefCell` or stdout in the terminal).

use crate::paper::PaperId;
use crate::view::NavView;

pub trait Surface {
    /// Make the question at `index` the only visible one. `None` hides all.
    fn show_question(&self, index: Option<usize>);

    /// Redraw the prev/next controls and the position label.
    fn render_nav(&self, view: &NavView);

    /// Disable (`true`) or re-enable (`false`) the advance control.
    fn set_submitting(&self, submitting: bool);

    /// Blocking notice to the user.
    fn notify(&self, message: &str);

    /// Blocking yes/no question to the user.
    fn confirm(&self, message: &str) -> bool;

    /// Reload the page after the paper has been handed in.
    fn reload(&self);

    /// Let the native form submission proceed with the serialized answers.
    ///
    /// Returns `false` when the form could not be handed the answers; the
    /// paper is then still open.
    fn submit_form(&self, paper_id: &PaperId, answers_json: &str) -> bool;
}
