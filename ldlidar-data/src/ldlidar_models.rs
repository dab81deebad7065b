#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported LD-series models. Both stream the same 0x54-framed protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LdlidarModel {
    #[default]
    Ld06,
    Ld19,
}

pub fn model_baud_rate(model: LdlidarModel) -> u32 {
    match model {
        LdlidarModel::Ld06 => 230400,
        LdlidarModel::Ld19 => 230400,
    }
}
