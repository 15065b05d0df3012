//! Opcode values understood by the bridge

/// Liveness probe, always answered with `"3"`
pub const OP_PING: u8 = 0x10;
/// Zero-argument global function by name
pub const OP_CALL_GLOBAL: u8 = 0x11;
/// Zero-argument attribute function, `"object.attr"`
pub const OP_CALL_ATTR: u8 = 0x12;
/// One-argument attribute function, `"object.attr,N"`
pub const OP_CALL_ATTR_ARG: u8 = 0x13;
/// Show a glyph or scroll a string
pub const OP_SHOW_TEXT: u8 = 0x20;
/// Show an image
pub const OP_SHOW_IMAGE: u8 = 0x21;
/// Read a pixel, `"x,y"`
pub const OP_GET_PIXEL: u8 = 0x23;
/// Write a pixel, `"x,y,v"`
pub const OP_SET_PIXEL: u8 = 0x24;
/// Calibrate the compass and report the result
pub const OP_CALIBRATE_COMPASS: u8 = 0x37;
/// Test for a named gesture
pub const OP_WAS_GESTURE: u8 = 0x41;
/// Set the radio group
pub const OP_RADIO_GROUP: u8 = 0x50;
/// Set the radio transmit power
pub const OP_RADIO_POWER: u8 = 0x51;
/// Send a radio packet
pub const OP_RADIO_SEND: u8 = 0x52;
/// Poll the radio for a packet
pub const OP_RADIO_RECEIVE: u8 = 0x53;
/// Start a tone without waiting for it
pub const OP_PLAY_TONE: u8 = 0x60;

/// Recognized opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Opcode {
    Ping,
    CallGlobal,
    CallAttr,
    CallAttrArg,
    ShowText,
    ShowImage,
    GetPixel,
    SetPixel,
    CalibrateCompass,
    WasGesture,
    RadioGroup,
    RadioPower,
    RadioSend,
    RadioReceive,
    PlayTone,
}

impl Opcode {
    /// Every recognized opcode
    pub const ALL: [Opcode; 15] = [
        Opcode::Ping,
        Opcode::CallGlobal,
        Opcode::CallAttr,
        Opcode::CallAttrArg,
        Opcode::ShowText,
        Opcode::ShowImage,
        Opcode::GetPixel,
        Opcode::SetPixel,
        Opcode::CalibrateCompass,
        Opcode::WasGesture,
        Opcode::RadioGroup,
        Opcode::RadioPower,
        Opcode::RadioSend,
        Opcode::RadioReceive,
        Opcode::PlayTone,
    ];

    /// Look up an opcode by exact byte value
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            OP_PING => Some(Opcode::Ping),
            OP_CALL_GLOBAL => Some(Opcode::CallGlobal),
            OP_CALL_ATTR => Some(Opcode::CallAttr),
            OP_CALL_ATTR_ARG => Some(Opcode::CallAttrArg),
            OP_SHOW_TEXT => Some(Opcode::ShowText),
            OP_SHOW_IMAGE => Some(Opcode::ShowImage),
            OP_GET_PIXEL => Some(Opcode::GetPixel),
            OP_SET_PIXEL => Some(Opcode::SetPixel),
            OP_CALIBRATE_COMPASS => Some(Opcode::CalibrateCompass),
            OP_WAS_GESTURE => Some(Opcode::WasGesture),
            OP_RADIO_GROUP => Some(Opcode::RadioGroup),
            OP_RADIO_POWER => Some(Opcode::RadioPower),
            OP_RADIO_SEND => Some(Opcode::RadioSend),
            OP_RADIO_RECEIVE => Some(Opcode::RadioReceive),
            OP_PLAY_TONE => Some(Opcode::PlayTone),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Opcode::Ping => OP_PING,
            Opcode::CallGlobal => OP_CALL_GLOBAL,
            Opcode::CallAttr => OP_CALL_ATTR,
            Opcode::CallAttrArg => OP_CALL_ATTR_ARG,
            Opcode::ShowText => OP_SHOW_TEXT,
            Opcode::ShowImage => OP_SHOW_IMAGE,
            Opcode::GetPixel => OP_GET_PIXEL,
            Opcode::SetPixel => OP_SET_PIXEL,
            Opcode::CalibrateCompass => OP_CALIBRATE_COMPASS,
            Opcode::WasGesture => OP_WAS_GESTURE,
            Opcode::RadioGroup => OP_RADIO_GROUP,
            Opcode::RadioPower => OP_RADIO_POWER,
            Opcode::RadioSend => OP_RADIO_SEND,
            Opcode::RadioReceive => OP_RADIO_RECEIVE,
            Opcode::PlayTone => OP_PLAY_TONE,
        }
    }

    /// Returns true for the three name-lookup opcodes
    pub fn is_registry_call(&self) -> bool {
        matches!(
            self,
            Opcode::CallGlobal | Opcode::CallAttr | Opcode::CallAttrArg
        )
    }
}
