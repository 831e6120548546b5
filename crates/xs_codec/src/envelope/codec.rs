use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;

use log::debug;

use crate::CodecConfig;
use crate::envelope::ArrayWrapper;
use crate::error::EnvelopeError;
use crate::info::{Capability, TypeIdentity};
use crate::names::{TypeNameParser, TypeNameSerializer};
use crate::registry::ModuleLookup;
use crate::value::{Primitive, SelfDescribing, SerializationInfo, Value};

/// Separates the type name from the payload of an envelope.
pub const SEPARATOR: char = ':';

// -----------------------------------------------------------------------------
// EnvelopeCodec

/// Encodes values as `TypeName:Payload` strings and decodes them back.
///
/// # Encoding rules
///
/// 1. Null values are rejected with [`EnvelopeError::NullValue`].
/// 2. Arrays are wrapped in an [`ArrayWrapper`] and tagged `ArrayWrapper`.
/// 3. Objects must be [`SelfDescribing`], otherwise
///    [`EnvelopeError::MissingCapability`] is returned.
/// 4. The tag is the canonical name of the runtime type, see
///    [`TypeNameSerializer`].
///
/// Objects and arrays are written as a JSON object holding the envelope of
/// every member, or `null`.
///
/// # Decoding rules
///
/// 1. The envelope is split at its first `:` only; payloads may contain `:`.
/// 2. A tag that does not resolve in this process yields
///    [`EnvelopeError::TypeNotFound`].
/// 3. A resolved type without serialization capability, including bare
///    array types, yields [`EnvelopeError::MissingCapability`].
/// 4. A decoded [`ArrayWrapper`] is replaced by the array it wraps.
///
/// Nested envelopes deeper than [`CodecConfig::max_nesting_depth`] are
/// rejected on both sides.
///
/// # Examples
///
/// ```
/// use xs_codec::EnvelopeCodec;
/// use xs_codec::info::TypeIdentity;
/// use xs_codec::registry::ModuleRegistry;
/// use xs_codec::registry::builtin::I32;
/// use xs_codec::value::{ArrayValue, Value};
///
/// let registry = ModuleRegistry::new();
/// let codec = EnvelopeCodec::new(&registry);
///
/// let envelope = codec.serialize(&Value::from("a:b")).unwrap();
/// assert_eq!(envelope, "String:a:b");
/// assert_eq!(codec.deserialize(envelope.as_str()).unwrap(), Value::from("a:b"));
///
/// let array = Value::from(ArrayValue::from_values(TypeIdentity::of(&I32), [1, 2]));
/// let envelope = codec.serialize(&array).unwrap();
/// assert!(envelope.starts_with("ArrayWrapper:{"));
/// assert_eq!(codec.deserialize(envelope.as_str()).unwrap(), array);
///
/// assert!(codec.deserialize(None::<&str>).is_err());
/// assert!(codec.deserialize("noColonHere").is_err());
/// ```
pub struct EnvelopeCodec<'a, L: ModuleLookup + ?Sized> {
    lookup: &'a L,
    config: CodecConfig,
}

impl<'a, L: ModuleLookup + ?Sized> EnvelopeCodec<'a, L> {
    /// Creates a codec with the default configuration.
    #[inline]
    pub fn new(lookup: &'a L) -> Self {
        Self::with_config(lookup, CodecConfig::default())
    }

    #[inline]
    pub fn with_config(lookup: &'a L, config: CodecConfig) -> Self {
        Self { lookup, config }
    }

    #[inline(always)]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    #[inline]
    pub fn parser(&self) -> TypeNameParser<'_, L> {
        TypeNameParser::new(self.lookup, &self.config)
    }

    #[inline]
    pub fn serializer(&self) -> TypeNameSerializer<'_> {
        TypeNameSerializer::new(&self.config)
    }

    /// Returns the canonical name of `identity`.
    #[inline]
    pub fn type_name(&self, identity: &TypeIdentity) -> String {
        self.serializer().serialize(identity)
    }

    /// Parses and resolves a qualified type name.
    #[inline]
    pub fn parse_type(&self, text: &str) -> Option<TypeIdentity> {
        self.parser().parse(text)
    }

    /// Whether [`serialize`](Self::serialize) accepts the shape of `value`.
    ///
    /// `false` for null values, objects without capability and arrays
    /// holding such objects. Null array items are accepted.
    pub fn is_serializable(&self, value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Primitive(_) => true,
            Value::Object(object) => object.as_self_describing().is_some(),
            Value::Array(array) => array
                .items()
                .iter()
                .all(|item| item.is_null() || self.is_serializable(item)),
        }
    }

    /// Encodes `value` as an envelope.
    pub fn serialize<'v>(
        &self,
        value: impl Into<Option<&'v Value>>,
    ) -> Result<String, EnvelopeError> {
        let value = value.into().ok_or(EnvelopeError::NullValue)?;
        self.encode(value, 0)
    }

    /// Decodes an envelope written by [`serialize`](Self::serialize).
    pub fn deserialize<'e>(
        &self,
        envelope: impl Into<Option<&'e str>>,
    ) -> Result<Value, EnvelopeError> {
        let envelope = envelope.into().ok_or(EnvelopeError::NullEnvelope)?;
        self.decode(envelope, 0)
    }

    // -------------------------------------------------------------------------
    // Encoding

    fn encode(&self, value: &Value, depth: usize) -> Result<String, EnvelopeError> {
        self.check_depth(depth)?;
        let carrier = self.carrier(value)?;
        let payload = match &carrier {
            Carrier::Primitive(primitive) => {
                primitive.to_payload(|identity| self.type_name(identity))
            }
            Carrier::Object(object) => {
                let mut info = SerializationInfo::new();
                object.write_info(&mut info);
                self.write_info(&info, depth)?
            }
            Carrier::Array(wrapper) => {
                let mut info = SerializationInfo::new();
                wrapper.write_info(&mut info);
                self.write_info(&info, depth)?
            }
        };
        let tag = self.type_name(&carrier.type_identity());
        Ok(format!("{tag}{SEPARATOR}{payload}"))
    }

    fn carrier<'v>(&self, value: &'v Value) -> Result<Carrier<'v>, EnvelopeError> {
        match value {
            Value::Null => Err(EnvelopeError::NullValue),
            Value::Primitive(primitive) => Ok(Carrier::Primitive(primitive)),
            Value::Object(object) => match object.as_self_describing() {
                Some(object) => Ok(Carrier::Object(object)),
                None => Err(EnvelopeError::MissingCapability(
                    self.type_name(&object.type_identity()),
                )),
            },
            Value::Array(array) => Ok(Carrier::Array(ArrayWrapper::wrap(array))),
        }
    }

    fn write_info(&self, info: &SerializationInfo, depth: usize) -> Result<String, EnvelopeError> {
        let members = info
            .iter()
            .map(|(key, value)| {
                let envelope = match value {
                    Value::Null => None,
                    value => Some(self.encode(value, depth + 1)?),
                };
                Ok((key, envelope))
            })
            .collect::<Result<BTreeMap<&str, Option<String>>, EnvelopeError>>()?;
        Ok(serde_json::to_string(&members)?)
    }

    // -------------------------------------------------------------------------
    // Decoding

    fn decode(&self, envelope: &str, depth: usize) -> Result<Value, EnvelopeError> {
        self.check_depth(depth)?;
        let (tag, payload) = envelope
            .split_once(SEPARATOR)
            .ok_or_else(|| EnvelopeError::Malformed(String::from(envelope)))?;

        let identity = self
            .parse_type(tag)
            .ok_or_else(|| EnvelopeError::TypeNotFound(String::from(tag)))?;

        match identity.capability() {
            Capability::None => {
                debug!("`{tag}` resolved to `{identity:?}`, which has no serialization capability");
                Err(EnvelopeError::MissingCapability(String::from(tag)))
            }
            Capability::Primitive(kind) => {
                Primitive::from_payload(kind, payload, |text| self.parse_type(text))
                    .map(Value::Primitive)
            }
            Capability::Object(reader) => {
                let info = self.read_info(payload, depth)?;
                Ok(Value::Object(reader.read(&identity, &info)?))
            }
            Capability::ArrayWrapper => {
                let info = self.read_info(payload, depth)?;
                Ok(Value::Array(ArrayWrapper::from_info(&info)?.into_inner()))
            }
        }
    }

    fn read_info(&self, payload: &str, depth: usize) -> Result<SerializationInfo, EnvelopeError> {
        let members: BTreeMap<String, Option<String>> = serde_json::from_str(payload)?;
        let mut info = SerializationInfo::new();
        for (key, envelope) in members {
            let value = match envelope {
                Some(envelope) => self.decode(&envelope, depth + 1)?,
                None => Value::Null,
            };
            info.add(key, value);
        }
        Ok(info)
    }

    #[inline]
    fn check_depth(&self, depth: usize) -> Result<(), EnvelopeError> {
        if depth > self.config.max_nesting_depth {
            return Err(EnvelopeError::NestingTooDeep(self.config.max_nesting_depth));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Carrier

/// How a non-null value is written.
enum Carrier<'v> {
    Primitive(&'v Primitive),
    Object(&'v dyn SelfDescribing),
    Array(ArrayWrapper<'v>),
}

impl Carrier<'_> {
    fn type_identity(&self) -> TypeIdentity {
        match self {
            Self::Primitive(primitive) => primitive.type_identity(),
            Self::Object(object) => object.type_identity(),
            Self::Array(_) => ArrayWrapper::type_identity(),
        }
    }
}
