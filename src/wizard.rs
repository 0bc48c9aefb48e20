use crate::format::{format_label, FormattedLabel};
use crate::label::{FieldSlot, LabelData, LabelPart, Side};
use crate::preview::PreviewSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    From,
    To,
    Result,
}

/// The wizard owns the one mutable label snapshot; widget code requests
/// mutations through these methods and never touches the label directly.
///
/// Illegal step transitions are silent no-ops: they change neither the step
/// nor the data.
pub struct Wizard {
    step: Step,
    label: LabelData,
    summary: Option<FormattedLabel>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::From,
            label: LabelData::empty(),
            summary: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn label(&self) -> &LabelData {
        &self.label
    }

    pub fn summary(&self) -> Option<&FormattedLabel> {
        self.summary.as_ref()
    }

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.label.project = project.into();
    }

    /// Whole-endpoint replacement; no per-field merge at this layer. The
    /// caller builds the new part from the previous snapshot plus the one
    /// changed field.
    pub fn set_part(&mut self, side: Side, part: LabelPart) {
        match side {
            Side::From => self.label.from = part,
            Side::To => self.label.to = part,
        }
    }

    pub fn set_field_name(&mut self, side: Side, slot: FieldSlot, name: impl Into<String>) {
        let mut field = self.label.part(side).field(slot).clone();
        field.name = name.into();
        let part = self.label.part(side).clone().with_field(slot, field);
        self.set_part(side, part);
    }

    /// Attaches a newly picked image blob to one field. Empty selections and
    /// undecodable blobs are no-ops. The slot's previous preview, if any, is
    /// released at the moment of overwrite so rapid re-picks cannot leak.
    pub fn attach_image(
        &mut self,
        side: Side,
        slot: FieldSlot,
        bytes: Vec<u8>,
        previews: &mut dyn PreviewSource,
    ) {
        if bytes.is_empty() {
            return;
        }
        let Some(preview) = previews.create(&bytes) else {
            return;
        };

        let mut field = self.label.part(side).field(slot).clone();
        if let Some(old) = field.preview.take() {
            previews.release(old);
        }
        field.image = Some(bytes);
        field.preview = Some(preview);
        let part = self.label.part(side).clone().with_field(slot, field);
        self.set_part(side, part);
    }

    pub fn remove_image(&mut self, side: Side, slot: FieldSlot, previews: &mut dyn PreviewSource) {
        let mut field = self.label.part(side).field(slot).clone();
        if let Some(preview) = field.preview.take() {
            previews.release(preview);
        }
        field.image = None;
        let part = self.label.part(side).clone().with_field(slot, field);
        self.set_part(side, part);
    }

    pub fn next(&mut self) {
        if self.step == Step::From {
            self.step = Step::To;
        }
    }

    pub fn back(&mut self) {
        if self.step == Step::To {
            self.step = Step::From;
        }
    }

    pub fn generate(&mut self) {
        if self.step == Step::To {
            self.summary = Some(format_label(&self.label));
            self.step = Step::Result;
        }
    }

    /// Releases every preview still reachable from the label, then resets to
    /// a fresh empty label on the first step.
    pub fn restart(&mut self, previews: &mut dyn PreviewSource) {
        if self.step != Step::Result {
            return;
        }
        for part in [&self.label.from, &self.label.to] {
            for field in part.fields() {
                if let Some(preview) = field.preview {
                    previews.release(preview);
                }
            }
        }
        self.label = LabelData::empty();
        self.summary = None;
        self.step = Step::From;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
