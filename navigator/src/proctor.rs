//! Teacher-side "end exam": closes the paper for every student.

#[cfg(test)]
#[path = "proctor_test.rs"]
mod proctor_test;

use tracing::{error, info, warn};

use crate::api::ExamApi;
use crate::consts::{CONFIRM_END_EXAM, END_ERROR_MESSAGE, END_FAILED_MESSAGE, END_OK_MESSAGE};
use crate::nav::NavError;
use crate::paper::PaperId;
use crate::state::SubmitLock;
use crate::surface::Surface;

/// Confirm, then ask the server to end the exam, and reload on success.
///
/// Returns `Ok(false)` when the teacher declines the confirmation.
///
/// # Errors
///
/// Returns [`NavError::Busy`] if `lock` is held, and [`NavError::Rejected`] or
/// [`NavError::Transport`] after notifying the teacher.
pub async fn end_exam<A, S>(api: &A, surface: &S, lock: &SubmitLock, paper_id: &PaperId) -> Result<bool, NavError>
where
    A: ExamApi + ?Sized,
    S: Surface + ?Sized,
{
    if !surface.confirm(CONFIRM_END_EXAM) {
        return Ok(false);
    }

    let outcome = {
        let Some(guard) = lock.try_acquire() else {
            warn!(%paper_id, "end exam already in flight");
            return Err(NavError::Busy);
        };
        surface.set_submitting(true);
        let _guard = guard.on_release(|| surface.set_submitting(false));
        api.end_exam(paper_id).await
    };

    match outcome {
        Ok(reply) if reply.is_success() => {
            info!(%paper_id, "exam ended");
            surface.notify(&reply.message_or(END_OK_MESSAGE));
            surface.reload();
            Ok(true)
        }
        Ok(reply) => {
            let message = reply.message_or(END_FAILED_MESSAGE);
            warn!(%paper_id, %message, "end exam rejected");
            surface.notify(&message);
            Err(NavError::Rejected(message))
        }
        Err(e) => {
            error!(%paper_id, error = %e, "end exam failed");
            surface.notify(END_ERROR_MESSAGE);
            Err(e.into())
        }
    }
}
