//! List adapter binding records to a single recycled row.

use quake_core::{Localizer, RecordSource, RenderedRow, RowPresenter};

/// Binds rows of a [`RecordSource`] through one reusable [`RenderedRow`].
pub struct RowAdapter<'a, S: ?Sized, L> {
    source: &'a S,
    presenter: RowPresenter<L>,
    recycled: Option<RenderedRow>,
}

impl<'a, S, L> RowAdapter<'a, S, L>
where
    S: RecordSource + ?Sized,
    L: Localizer,
{
    pub fn new(source: &'a S, presenter: RowPresenter<L>) -> Self {
        Self {
            source,
            presenter,
            recycled: None,
        }
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.source.record_count()
    }

    /// Bind row `index`, reusing the previous row's buffers.
    pub fn bind(&mut self, index: usize) -> Option<&RenderedRow> {
        let recycled = self.recycled.take();
        self.recycled = self.presenter.render_at(self.source, index, recycled);
        self.recycled.as_ref()
    }
}
