// In: src/bridge/fields.rs

//! The field-level driver: encodes and decodes the named array fields of a
//! macromolecular structure record.
//!
//! Each field has a fixed value type and a default strategy. The defaults match
//! the widely deployed encoder, so buffers produced here are interchangeable with
//! those from other writers of the format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::array_pipeline::strategy::{
    CharStrategy, FloatStrategy, IntStrategy, Strategy, StringStrategy,
};
use crate::array_pipeline::{orchestrator, planner};
use crate::config::{CodecConfig, SelectionMode};
use crate::error::CodecError;
use crate::types::{TypedArray, ValueType};

//==================================================================================
// I. Field Catalogue
//==================================================================================

/// A named array field of a structure record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StructureField {
    XCoordList,
    YCoordList,
    ZCoordList,
    BFactorList,
    OccupancyList,
    AtomIdList,
    AltLocList,
    InsCodeList,
    GroupIdList,
    GroupTypeList,
    SecStructList,
    SequenceIndexList,
    ChainIdList,
    ChainNameList,
    BondAtomList,
    BondOrderList,
}

impl StructureField {
    pub const ALL: [StructureField; 16] = [
        StructureField::XCoordList,
        StructureField::YCoordList,
        StructureField::ZCoordList,
        StructureField::BFactorList,
        StructureField::OccupancyList,
        StructureField::AtomIdList,
        StructureField::AltLocList,
        StructureField::InsCodeList,
        StructureField::GroupIdList,
        StructureField::GroupTypeList,
        StructureField::SecStructList,
        StructureField::SequenceIndexList,
        StructureField::ChainIdList,
        StructureField::ChainNameList,
        StructureField::BondAtomList,
        StructureField::BondOrderList,
    ];

    /// The field's key as it appears in a structure record.
    pub fn name(&self) -> &'static str {
        match self {
            StructureField::XCoordList => "x_coord_list",
            StructureField::YCoordList => "y_coord_list",
            StructureField::ZCoordList => "z_coord_list",
            StructureField::BFactorList => "b_factor_list",
            StructureField::OccupancyList => "occupancy_list",
            StructureField::AtomIdList => "atom_id_list",
            StructureField::AltLocList => "alt_loc_list",
            StructureField::InsCodeList => "ins_code_list",
            StructureField::GroupIdList => "group_id_list",
            StructureField::GroupTypeList => "group_type_list",
            StructureField::SecStructList => "sec_struct_list",
            StructureField::SequenceIndexList => "sequence_index_list",
            StructureField::ChainIdList => "chain_id_list",
            StructureField::ChainNameList => "chain_name_list",
            StructureField::BondAtomList => "bond_atom_list",
            StructureField::BondOrderList => "bond_order_list",
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            StructureField::XCoordList
            | StructureField::YCoordList
            | StructureField::ZCoordList
            | StructureField::BFactorList
            | StructureField::OccupancyList => ValueType::Float32,
            StructureField::AltLocList | StructureField::InsCodeList => ValueType::Char,
            StructureField::ChainIdList | StructureField::ChainNameList => ValueType::String,
            StructureField::AtomIdList
            | StructureField::GroupIdList
            | StructureField::GroupTypeList
            | StructureField::SecStructList
            | StructureField::SequenceIndexList
            | StructureField::BondAtomList
            | StructureField::BondOrderList => ValueType::Int32,
        }
    }

    /// The strategy the default table assigns to this field under `config`.
    pub fn default_strategy(&self, config: &CodecConfig) -> Strategy {
        match self {
            StructureField::XCoordList | StructureField::YCoordList | StructureField::ZCoordList => {
                Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 {
                    factor: config.coordinate_factor,
                })
            }
            StructureField::BFactorList => Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 {
                factor: config.b_factor_factor,
            }),
            StructureField::OccupancyList => Strategy::Float(FloatStrategy::ScaledRunLength {
                factor: config.occupancy_factor,
            }),
            StructureField::AtomIdList
            | StructureField::GroupIdList
            | StructureField::SequenceIndexList => Strategy::Int(IntStrategy::DeltaRunLength),
            StructureField::AltLocList | StructureField::InsCodeList => {
                Strategy::Char(CharStrategy::RunLength)
            }
            StructureField::GroupTypeList | StructureField::BondAtomList => {
                Strategy::Int(IntStrategy::Raw32)
            }
            StructureField::SecStructList | StructureField::BondOrderList => {
                Strategy::Int(IntStrategy::Raw8)
            }
            StructureField::ChainIdList | StructureField::ChainNameList => {
                Strategy::String(StringStrategy::FixedLength {
                    length: config.chain_name_length,
                })
            }
        }
    }
}

//==================================================================================
// II. Strategy Selection
//==================================================================================

/// Chooses the strategy for one field: an override wins, then the selection mode.
fn select_strategy(
    field: StructureField,
    array: &TypedArray,
    config: &CodecConfig,
) -> Result<Strategy, CodecError> {
    if let Some(spec) = config.overrides.get(&field) {
        return spec.to_strategy();
    }
    match config.selection {
        SelectionMode::DefaultTable => Ok(field.default_strategy(config)),
        SelectionMode::Smallest => {
            let (strategy, size) = planner::plan_strategy(array, &config.planner)?;
            log::debug!("field {}: planner chose {} ({} bytes)", field.name(), strategy, size);
            Ok(strategy)
        }
    }
}

//==================================================================================
// III. Public Field-Level API
//==================================================================================

/// Encodes a set of named fields. Fails on the first field that can not be
/// encoded, naming it in the error.
pub fn encode_fields<I>(
    fields: I,
    config: &CodecConfig,
) -> Result<BTreeMap<StructureField, Vec<u8>>, CodecError>
where
    I: IntoIterator<Item = (StructureField, TypedArray)>,
{
    config.validate()?;
    let mut encoded = BTreeMap::new();
    for (field, array) in fields {
        let bytes = encode_field(field, &array, config).map_err(|e| e.in_field(field.name()))?;
        if encoded.insert(field, bytes).is_some() {
            return Err(duplicate_field(field));
        }
    }
    log_metric!("event" = "encode_fields", "fields" = encoded.len());
    Ok(encoded)
}

/// Decodes a set of named field buffers, checking each against the field's
/// declared value type.
pub fn decode_fields<'a, I>(fields: I) -> Result<BTreeMap<StructureField, TypedArray>, CodecError>
where
    I: IntoIterator<Item = (StructureField, &'a [u8])>,
{
    let mut decoded = BTreeMap::new();
    for (field, bytes) in fields {
        let array = orchestrator::decode_array(bytes, field.value_type())
            .map_err(|e| e.in_field(field.name()))?;
        if decoded.insert(field, array).is_some() {
            return Err(duplicate_field(field));
        }
    }
    log_metric!("event" = "decode_fields", "fields" = decoded.len());
    Ok(decoded)
}

fn encode_field(
    field: StructureField,
    array: &TypedArray,
    config: &CodecConfig,
) -> Result<Vec<u8>, CodecError> {
    if array.value_type() != field.value_type() {
        return Err(CodecError::TypeMismatch {
            expected: field.value_type(),
            actual: array.value_type(),
        });
    }
    let strategy = select_strategy(field, array, config)?;
    orchestrator::encode_array(array, strategy)
}

fn duplicate_field(field: StructureField) -> CodecError {
    CodecError::InvalidParameter("field given more than once".to_string()).in_field(field.name())
}
