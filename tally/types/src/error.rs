use {
    data_encoding::BASE64,
    std::any::type_name,
    tally_math::MathError,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum StdError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid {ty} `{name}`: {reason}")]
    InvalidName {
        ty: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("invalid genesis state: {reason}")]
    InvalidGenesis { reason: String },

    #[error("data not found! type: {ty}, storage key: {key}")]
    DataNotFound { ty: &'static str, key: String },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn invalid_address(address: impl ToString, reason: impl ToString) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_name<T>(name: impl ToString, reason: &'static str) -> Self {
        Self::InvalidName {
            ty: type_name::<T>(),
            name: name.to_string(),
            reason,
        }
    }

    pub fn invalid_genesis(reason: impl ToString) -> Self {
        Self::InvalidGenesis {
            reason: reason.to_string(),
        }
    }

    pub fn data_not_found<T>(key: &[u8]) -> Self {
        Self::DataNotFound {
            ty: type_name::<T>(),
            key: BASE64.encode(key),
        }
    }

    pub fn serialize<T>(codec: &'static str, reason: impl ToString) -> Self {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T>(codec: &'static str, reason: impl ToString) -> Self {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
