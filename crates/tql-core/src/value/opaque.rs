use std::{any::Any, borrow::Cow, fmt, sync::Arc};

///
/// OpaquePayload
///
/// Type-erased, equality-capable payload carried by `OpaqueValue`.
/// Blanket-implemented for every `PartialEq + Debug + Send + Sync` type.
///

pub trait OpaquePayload: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another erased payload.
    /// Payloads of different concrete types are never equal.
    fn payload_eq(&self, other: &dyn OpaquePayload) -> bool;
}

impl<T> OpaquePayload for T
where
    T: Any + PartialEq + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn payload_eq(&self, other: &dyn OpaquePayload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

///
/// OpaqueValue
///
/// Catch-all operand outside the primitive set. Carries a declared-type
/// identity that gates equality; opaque values are never ordered.
///

#[derive(Clone)]
pub struct OpaqueValue {
    type_name: Cow<'static, str>,
    payload: Arc<dyn OpaquePayload>,
}

impl OpaqueValue {
    /// Wrap a payload under an explicit declared type.
    pub fn new<P: OpaquePayload>(type_name: impl Into<Cow<'static, str>>, payload: P) -> Self {
        Self {
            type_name: type_name.into(),
            payload: Arc::new(payload),
        }
    }

    /// Wrap a payload, using its Rust type name as the declared type.
    pub fn of<P: OpaquePayload>(payload: P) -> Self {
        Self::new(std::any::type_name::<P>(), payload)
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn payload(&self) -> &dyn OpaquePayload {
        self.payload.as_ref()
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().as_any().downcast_ref::<T>()
    }

    /// Returns true when both values share the same declared type.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other) && self.payload.as_ref().payload_eq(other.payload.as_ref())
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.type_name, self.payload)
    }
}
