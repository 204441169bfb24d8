//! Assignment detail modal: fetch, render, and slot lifecycle.

use std::sync::Arc;

use crate::assignment::domain::{AssignmentId, BucketCounts, Dismissal};
use crate::assignment::ports::{AssignmentBackend, AssignmentBackendResult};

/// Modal markup skeleton. Computed fields come pre-formatted so the template
/// carries no arithmetic.
const MODAL_TEMPLATE: &str = r#"<div class="modal-overlay" data-assignment-id="{{ id }}">
  <div class="modal-content">
    <span class="status-badge {{ status_class }}">{{ status_label }}</span>
    <h2>{{ service_type }} Interpretation</h2>
    <dl class="detail-grid">
      <dt>When</dt><dd>{{ date_range }} ({{ duration }} hours)</dd>
      <dt>Where</dt><dd>{{ address }}</dd>
      <dt>Languages</dt><dd>{{ language_pair }}</dd>
      <dt>Rate</dt><dd>{{ rate }}/hr, minimum {{ minimum_hours }} hours</dd>
      <dt>Estimated Total</dt><dd>{{ estimated_total }}</dd>
    </dl>
    {% if special_requirements %}<p class="requirements">{{ special_requirements }}</p>{% endif %}
    {% if notes %}<p class="notes">{{ notes }}</p>{% endif %}
    <div class="modal-actions">
      {% if can_start %}<button data-action="start">Start Assignment</button>{% endif %}
      {% if can_complete %}<button data-action="complete">Mark Complete</button>{% endif %}
      {% if can_cancel %}<button data-action="cancel">Cancel Assignment</button>{% endif %}
      <button data-action="close">Close</button>
    </div>
  </div>
</div>"#;

/// A rendered, currently open detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    id: AssignmentId,
    markup: String,
}

impl ModalView {
    /// Assignment the modal describes.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Rendered modal markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// Outcome of opening the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalFetch {
    /// The modal opened with rendered markup.
    Opened(ModalView),
    /// The detail payload could not be fetched or rendered.
    Failed {
        /// User-facing failure message.
        message: String,
    },
}

/// Fetches assignment detail and owns the single modal slot.
///
/// At most one modal is open at a time; opening another tears the previous
/// one down first, and every failure path leaves the slot empty.
#[derive(Debug)]
pub struct DetailService<B> {
    backend: Arc<B>,
    open_modal: Option<AssignmentId>,
}

impl<B: AssignmentBackend> DetailService<B> {
    /// Creates a service over the assignment backend.
    #[must_use]
    pub const fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            open_modal: None,
        }
    }

    /// Returns the id of the open modal, when one is open.
    #[must_use]
    pub const fn open_id(&self) -> Option<AssignmentId> {
        self.open_modal
    }

    /// Fetches the detail payload and opens the modal.
    ///
    /// A modal already open is dismissed first. On fetch or render failure
    /// the slot stays empty and the failure carries a user-facing message.
    pub async fn open(&mut self, id: AssignmentId) -> ModalFetch {
        self.open_modal = None;
        let detail = match self.backend.detail(id).await {
            Ok(detail) => detail,
            Err(error) => {
                tracing::warn!(id = %id, error = %error, "detail fetch failed");
                return ModalFetch::Failed {
                    message: error.user_message(),
                };
            }
        };

        let context = minijinja::context! {
            id => detail.id().value(),
            status_label => detail.status().label(),
            status_class => detail.status().css_class(),
            service_type => detail.service_type(),
            date_range => detail.slot().long_range(),
            duration => detail.slot().duration_display(),
            address => detail.full_address(),
            language_pair => detail.language_pair(),
            rate => detail.payment().hourly_rate().to_string(),
            minimum_hours => detail.payment().minimum_hours(),
            estimated_total => detail.estimated_total().to_string(),
            special_requirements => detail.special_requirements(),
            notes => detail.notes(),
            can_start => detail.can_start(),
            can_complete => detail.can_complete(),
            can_cancel => detail.can_cancel(),
        };
        match minijinja::Environment::new().render_str(MODAL_TEMPLATE, context) {
            Ok(markup) => {
                self.open_modal = Some(id);
                ModalFetch::Opened(ModalView { id, markup })
            }
            Err(error) => {
                tracing::warn!(id = %id, error = %error, "modal render failed");
                ModalFetch::Failed {
                    message: "Failed to display assignment details".to_owned(),
                }
            }
        }
    }

    /// Closes the open modal, if any, and reports whether one was open.
    pub fn dismiss(&mut self, reason: Dismissal) -> bool {
        let was_open = self.open_modal.take().is_some();
        if was_open {
            tracing::debug!(?reason, "modal dismissed");
        }
        was_open
    }

    /// Fetches the server-side bucket counts.
    ///
    /// Callers compare these against the local tallies to detect a stale
    /// view; nothing here reloads anything.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the counts cannot be fetched.
    pub async fn server_counts(&self) -> AssignmentBackendResult<BucketCounts> {
        self.backend.bucket_counts().await
    }
}
