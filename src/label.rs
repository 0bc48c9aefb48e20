use crate::preview::PreviewHandle;

/// One named value on a label part, optionally paired with a photo.
///
/// `preview` is set if and only if `image` is set; whoever discards a
/// populated field is responsible for releasing its preview handle through
/// the owning `PreviewSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelInfo {
    pub name: String,
    pub image: Option<Vec<u8>>,
    pub preview: Option<PreviewHandle>,
}

impl LabelInfo {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            image: None,
            preview: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Cabinet,
    Device,
    Port,
    SubPort,
}

impl FieldSlot {
    /// Fixed label order: cabinet/device/port/sub-port.
    pub const ALL: [FieldSlot; 4] = [
        FieldSlot::Cabinet,
        FieldSlot::Device,
        FieldSlot::Port,
        FieldSlot::SubPort,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FieldSlot::Cabinet => "Cabinet",
            FieldSlot::Device => "Device",
            FieldSlot::Port => "Port",
            FieldSlot::SubPort => "Sub-Port",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            FieldSlot::Cabinet => "e.g., US 1, HOUSING",
            FieldSlot::Device => "e.g., Industrial Switch",
            FieldSlot::Port => "e.g., P7, Core 1",
            FieldSlot::SubPort => "e.g., Tx,Rx, Core 2",
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, FieldSlot::SubPort)
    }
}

/// One side of a cable run. Sub-port may be left blank but the slot always
/// exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPart {
    pub cabinet: LabelInfo,
    pub device: LabelInfo,
    pub port: LabelInfo,
    pub sub_port: LabelInfo,
}

impl LabelPart {
    pub fn empty() -> Self {
        Self {
            cabinet: LabelInfo::empty(),
            device: LabelInfo::empty(),
            port: LabelInfo::empty(),
            sub_port: LabelInfo::empty(),
        }
    }

    pub fn field(&self, slot: FieldSlot) -> &LabelInfo {
        match slot {
            FieldSlot::Cabinet => &self.cabinet,
            FieldSlot::Device => &self.device,
            FieldSlot::Port => &self.port,
            FieldSlot::SubPort => &self.sub_port,
        }
    }

    /// Whole-part replacement of one slot; the other three slots carry over
    /// untouched. This is the only way a field changes.
    pub fn with_field(mut self, slot: FieldSlot, info: LabelInfo) -> Self {
        match slot {
            FieldSlot::Cabinet => self.cabinet = info,
            FieldSlot::Device => self.device = info,
            FieldSlot::Port => self.port = info,
            FieldSlot::SubPort => self.sub_port = info,
        }
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &LabelInfo> {
        FieldSlot::ALL.iter().map(|slot| self.field(*slot))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelData {
    pub project: String,
    pub from: LabelPart,
    pub to: LabelPart,
}

impl LabelData {
    /// Fresh-value factory. Every call builds a fully independent structure,
    /// so two labels never share a mutable sub-part.
    pub fn empty() -> Self {
        Self {
            project: String::new(),
            from: LabelPart::empty(),
            to: LabelPart::empty(),
        }
    }

    pub fn part(&self, side: Side) -> &LabelPart {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }
}
