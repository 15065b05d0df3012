//! Capability registry
//!
//! The names reachable through the call opcodes (0x11, 0x12, 0x13) are a
//! closed table built once at startup. A request can only ever reach an
//! entry in this table; there is no reflection and no way to name anything
//! else on the board.
//!
//! Entries are keyed by owning object, attribute name and arity, so
//! `pin0.write_digital` exists only as a one-argument call.

mod invocable;

pub use invocable::{Arity, Invocable, Nullary, Unary};

use core::fmt;

use heapless::Vec;

use crate::traits::{Axis, ButtonId};

/// Table capacity
pub const MAX_ENTRIES: usize = 192;

/// Highest pin number a `pinN` name can address
pub const MAX_PIN: u8 = 20;

/// Named objects that own attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Object {
    Display,
    Button(ButtonId),
    Pin(u8),
    Compass,
    Accelerometer,
    Radio,
    Music,
}

impl Object {
    /// Resolve an object name from a request, e.g. `"button_a"` or `"pin2"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "display" => Some(Object::Display),
            "button_a" => Some(Object::Button(ButtonId::A)),
            "button_b" => Some(Object::Button(ButtonId::B)),
            "compass" => Some(Object::Compass),
            "accelerometer" => Some(Object::Accelerometer),
            "radio" => Some(Object::Radio),
            "music" => Some(Object::Music),
            _ => {
                let digits = name.strip_prefix("pin")?;
                let canonical = !digits.is_empty()
                    && digits.bytes().all(|b| b.is_ascii_digit())
                    && (digits.len() == 1 || !digits.starts_with('0'));
                if !canonical {
                    return None;
                }
                let n: u8 = digits.parse().ok()?;
                (n <= MAX_PIN).then_some(Object::Pin(n))
            }
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Display => f.write_str("display"),
            Object::Button(ButtonId::A) => f.write_str("button_a"),
            Object::Button(ButtonId::B) => f.write_str("button_b"),
            Object::Pin(n) => write!(f, "pin{}", n),
            Object::Compass => f.write_str("compass"),
            Object::Accelerometer => f.write_str("accelerometer"),
            Object::Radio => f.write_str("radio"),
            Object::Music => f.write_str("music"),
        }
    }
}

/// One callable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Owning object; `None` for globals
    pub object: Option<Object>,
    /// Function or attribute name
    pub name: &'static str,
    /// What the call does
    pub invocable: Invocable,
}

/// Registry construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// More than `MAX_ENTRIES` entries
    Full,
    /// Same object, name and arity registered twice
    Duplicate,
    /// Pin number above `MAX_PIN`
    InvalidPin,
}

const GLOBALS: [(&str, Nullary); 2] = [
    ("running_time", Nullary::RunningTime),
    ("temperature", Nullary::Temperature),
];

const OBJECT_CALLS: [(Object, &str, Nullary); 20] = [
    (Object::Display, "on", Nullary::DisplayOn),
    (Object::Display, "off", Nullary::DisplayOff),
    (Object::Display, "is_on", Nullary::DisplayIsOn),
    (Object::Display, "clear", Nullary::DisplayClear),
    (Object::Display, "read_light_level", Nullary::ReadLightLevel),
    (Object::Compass, "calibrate", Nullary::Calibrate),
    (Object::Compass, "is_calibrated", Nullary::IsCalibrated),
    (Object::Compass, "clear_calibration", Nullary::ClearCalibration),
    (Object::Compass, "heading", Nullary::Heading),
    (Object::Compass, "get_x", Nullary::MagneticField(Axis::X)),
    (Object::Compass, "get_y", Nullary::MagneticField(Axis::Y)),
    (Object::Compass, "get_z", Nullary::MagneticField(Axis::Z)),
    (Object::Compass, "get_field_strength", Nullary::FieldStrength),
    (Object::Accelerometer, "get_x", Nullary::Acceleration(Axis::X)),
    (Object::Accelerometer, "get_y", Nullary::Acceleration(Axis::Y)),
    (Object::Accelerometer, "get_z", Nullary::Acceleration(Axis::Z)),
    (Object::Accelerometer, "current_gesture", Nullary::CurrentGesture),
    (Object::Radio, "on", Nullary::RadioOn),
    (Object::Radio, "off", Nullary::RadioOff),
    (Object::Music, "stop", Nullary::MusicStop),
];

/// The closed table of callable names
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry, MAX_ENTRIES>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty table
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The standard table, with pin attributes for each exposed pin
    pub fn standard(exposed_pins: &[u8]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for (name, call) in GLOBALS {
            registry.register(None, name, Invocable::Nullary(call))?;
        }
        for (object, name, call) in OBJECT_CALLS {
            registry.register(Some(object), name, Invocable::Nullary(call))?;
        }
        for button in [ButtonId::A, ButtonId::B] {
            let object = Some(Object::Button(button));
            registry.register(object, "is_pressed", Invocable::Nullary(Nullary::IsPressed(button)))?;
            registry.register(object, "was_pressed", Invocable::Nullary(Nullary::WasPressed(button)))?;
            registry.register(object, "get_presses", Invocable::Nullary(Nullary::GetPresses(button)))?;
        }
        for &pin in exposed_pins {
            registry.register_pin(pin)?;
        }

        Ok(registry)
    }

    fn register_pin(&mut self, pin: u8) -> Result<(), RegistryError> {
        if pin > MAX_PIN {
            return Err(RegistryError::InvalidPin);
        }
        let object = Some(Object::Pin(pin));
        self.register(object, "read_digital", Invocable::Nullary(Nullary::ReadDigital(pin)))?;
        self.register(object, "read_analog", Invocable::Nullary(Nullary::ReadAnalog(pin)))?;
        self.register(object, "write_digital", Invocable::Unary(Unary::WriteDigital(pin)))?;
        self.register(object, "write_analog", Invocable::Unary(Unary::WriteAnalog(pin)))?;
        self.register(object, "set_analog_period", Invocable::Unary(Unary::SetAnalogPeriod(pin)))?;
        self.register(
            object,
            "set_analog_period_microseconds",
            Invocable::Unary(Unary::SetAnalogPeriodMicros(pin)),
        )
    }

    /// Add one entry
    pub fn register(
        &mut self,
        object: Option<Object>,
        name: &'static str,
        invocable: Invocable,
    ) -> Result<(), RegistryError> {
        if self.lookup(object, name, invocable.arity()).is_some() {
            return Err(RegistryError::Duplicate);
        }
        self.entries
            .push(Entry { object, name, invocable })
            .map_err(|_| RegistryError::Full)
    }

    /// Find the entry for a call
    pub fn lookup(&self, object: Option<Object>, name: &str, arity: Arity) -> Option<Invocable> {
        self.entries
            .iter()
            .find(|e| e.object == object && e.name == name && e.invocable.arity() == arity)
            .map(|e| e.invocable)
    }

    /// Find a zero-argument global
    pub fn global(&self, name: &str) -> Option<Nullary> {
        match self.lookup(None, name, Arity::Zero)? {
            Invocable::Nullary(call) => Some(call),
            Invocable::Unary(_) => None,
        }
    }

    /// Find a zero-argument attribute
    pub fn attribute(&self, object: Object, name: &str) -> Option<Nullary> {
        match self.lookup(Some(object), name, Arity::Zero)? {
            Invocable::Nullary(call) => Some(call),
            Invocable::Unary(_) => None,
        }
    }

    /// Find a one-argument attribute
    pub fn attribute_with_arg(&self, object: Object, name: &str) -> Option<Unary> {
        match self.lookup(Some(object), name, Arity::One)? {
            Invocable::Unary(call) => Some(call),
            Invocable::Nullary(_) => None,
        }
    }

    /// All entries, in registration order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_names() {
        assert_eq!(Object::from_name("display"), Some(Object::Display));
        assert_eq!(Object::from_name("button_b"), Some(Object::Button(ButtonId::B)));
        assert_eq!(Object::from_name("pin0"), Some(Object::Pin(0)));
        assert_eq!(Object::from_name("pin20"), Some(Object::Pin(20)));
        assert_eq!(Object::from_name("pin21"), None);
        assert_eq!(Object::from_name("pin01"), None);
        assert_eq!(Object::from_name("pin"), None);
        assert_eq!(Object::from_name("pin+1"), None);
        assert_eq!(Object::from_name("os"), None);
        assert_eq!(Object::from_name("Display"), None);
    }

    #[test]
    fn test_object_names_roundtrip() {
        let objects = [
            Object::Display,
            Object::Button(ButtonId::A),
            Object::Button(ButtonId::B),
            Object::Pin(3),
            Object::Compass,
            Object::Accelerometer,
            Object::Radio,
            Object::Music,
        ];
        for object in objects {
            let name = object.to_string();
            assert_eq!(Object::from_name(&name), Some(object));
        }
    }

    #[test]
    fn test_standard_globals() {
        let registry = Registry::standard(&[]).unwrap();
        assert_eq!(registry.global("temperature"), Some(Nullary::Temperature));
        assert_eq!(registry.global("running_time"), Some(Nullary::RunningTime));
        assert_eq!(registry.global("reset"), None);
        assert_eq!(registry.global("__import__"), None);
    }

    #[test]
    fn test_standard_attributes() {
        let registry = Registry::standard(&[0]).unwrap();
        assert_eq!(
            registry.attribute(Object::Display, "read_light_level"),
            Some(Nullary::ReadLightLevel)
        );
        assert_eq!(
            registry.attribute(Object::Button(ButtonId::A), "get_presses"),
            Some(Nullary::GetPresses(ButtonId::A))
        );
        assert_eq!(
            registry.attribute_with_arg(Object::Pin(0), "write_digital"),
            Some(Unary::WriteDigital(0))
        );
    }

    #[test]
    fn test_arity_is_part_of_the_key() {
        let registry = Registry::standard(&[0]).unwrap();
        assert_eq!(registry.attribute(Object::Pin(0), "write_digital"), None);
        assert_eq!(registry.attribute_with_arg(Object::Pin(0), "read_digital"), None);
    }

    #[test]
    fn test_only_exposed_pins_are_registered() {
        let registry = Registry::standard(&[0, 2]).unwrap();
        assert!(registry.attribute(Object::Pin(2), "read_analog").is_some());
        assert!(registry.attribute(Object::Pin(1), "read_analog").is_none());
    }

    #[test]
    fn test_duplicate_pins_are_rejected() {
        assert_eq!(Registry::standard(&[1, 1]).unwrap_err(), RegistryError::Duplicate);
        assert_eq!(Registry::standard(&[21]).unwrap_err(), RegistryError::InvalidPin);
    }

    #[test]
    fn test_every_pin_fits() {
        let pins: std::vec::Vec<u8> = (0..=MAX_PIN).collect();
        let registry = Registry::standard(&pins).unwrap();
        assert!(registry.len() <= MAX_ENTRIES);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = Registry::new();
        registry
            .register(None, "temperature", Invocable::Nullary(Nullary::Temperature))
            .unwrap();
        assert_eq!(
            registry.register(None, "temperature", Invocable::Nullary(Nullary::RunningTime)),
            Err(RegistryError::Duplicate)
        );
        assert_eq!(registry.len(), 1);
    }
}
