//! Replication of per-instance mutable appearance
//!
//! State is a flat, ordered list of scalar fields. The owning side writes
//! the fields, receivers read them back in the same order through the same
//! `serialize` routine, so the order is defined in exactly one place.

use serde::{Deserialize, Serialize};
use crate::asset::{MaterialMaker, PhysicsKind};
use crate::error::{Error, Result};
use crate::registry::{StringId, NO_STRING_ID};

/// One replicated scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Field {
    Int(i32),
    Float(f32),
    Bool(bool),
}

/// Bidirectional field stream: writes on the owner, reads on receivers
pub trait StateStream {
    fn is_writing(&self) -> bool;
    fn serialize_i32(&mut self, value: &mut i32) -> Result<()>;
    fn serialize_f32(&mut self, value: &mut f32) -> Result<()>;
    fn serialize_bool(&mut self, value: &mut bool) -> Result<()>;
}

/// Owner side: collects fields in order
#[derive(Debug, Default)]
pub struct FieldWriter {
    fields: Vec<Field>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

impl StateStream for FieldWriter {
    fn is_writing(&self) -> bool {
        true
    }

    fn serialize_i32(&mut self, value: &mut i32) -> Result<()> {
        self.fields.push(Field::Int(*value));
        Ok(())
    }

    fn serialize_f32(&mut self, value: &mut f32) -> Result<()> {
        self.fields.push(Field::Float(*value));
        Ok(())
    }

    fn serialize_bool(&mut self, value: &mut bool) -> Result<()> {
        self.fields.push(Field::Bool(*value));
        Ok(())
    }
}

/// Receiver side: consumes fields in order
#[derive(Debug)]
pub struct FieldReader<'a> {
    fields: &'a [Field],
    cursor: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a [Field]) -> Self {
        Self { fields, cursor: 0 }
    }

    /// Fields not consumed yet
    pub fn remaining(&self) -> usize {
        self.fields.len() - self.cursor
    }

    fn next(&mut self, expected: &str) -> Result<Field> {
        let field = self.fields.get(self.cursor).copied().ok_or_else(|| {
            Error::Parse(format!("field stream ended at {}, expected {}", self.cursor, expected))
        })?;
        self.cursor += 1;
        Ok(field)
    }

    fn mismatch(&self, expected: &str, found: Field) -> Error {
        Error::Parse(format!(
            "field {} is {:?}, expected {}",
            self.cursor - 1,
            found,
            expected
        ))
    }
}

impl StateStream for FieldReader<'_> {
    fn is_writing(&self) -> bool {
        false
    }

    fn serialize_i32(&mut self, value: &mut i32) -> Result<()> {
        match self.next("int")? {
            Field::Int(v) => {
                *value = v;
                Ok(())
            }
            other => Err(self.mismatch("int", other)),
        }
    }

    fn serialize_f32(&mut self, value: &mut f32) -> Result<()> {
        match self.next("float")? {
            Field::Float(v) => {
                *value = v;
                Ok(())
            }
            other => Err(self.mismatch("float", other)),
        }
    }

    fn serialize_bool(&mut self, value: &mut bool) -> Result<()> {
        match self.next("bool")? {
            Field::Bool(v) => {
                *value = v;
                Ok(())
            }
            other => Err(self.mismatch("bool", other)),
        }
    }
}

impl MaterialMaker {
    /// Replicate ids and scalar parameters (paths stay on the owner)
    pub fn serialize(&mut self, stream: &mut dyn StateStream) -> Result<()> {
        stream.serialize_i32(&mut self.diffuse_id)?;
        stream.serialize_i32(&mut self.normal_id)?;
        stream.serialize_f32(&mut self.shininess)?;
        stream.serialize_bool(&mut self.transparent)
    }
}

/// Replicated appearance of a spawned die
#[derive(Debug, Clone, PartialEq)]
pub struct DiceAppearance {
    pub model_id: StringId,
    /// `None` until the first material arrives
    pub material: Option<MaterialMaker>,
    pub physics: PhysicsKind,
    pub physics_model_id: StringId,
}

impl Default for DiceAppearance {
    fn default() -> Self {
        Self {
            model_id: NO_STRING_ID,
            material: None,
            physics: PhysicsKind::Model,
            physics_model_id: NO_STRING_ID,
        }
    }
}

impl DiceAppearance {
    /// Number of fields `serialize` reads or writes
    pub const FIELD_COUNT: usize = 7;

    /// Field order: model id, diffuse id, normal id, shininess, transparent,
    /// physics kind, physics-model id
    pub fn serialize(&mut self, stream: &mut dyn StateStream) -> Result<()> {
        stream.serialize_i32(&mut self.model_id)?;

        self.material
            .get_or_insert_with(MaterialMaker::default)
            .serialize(stream)?;

        let mut physics = self.physics.as_i32();
        stream.serialize_i32(&mut physics)?;
        if !stream.is_writing() {
            self.physics = PhysicsKind::from_i32(physics)
                .ok_or_else(|| Error::Parse(format!("unknown physics kind {}", physics)))?;
        }

        stream.serialize_i32(&mut self.physics_model_id)
    }
}

#[cfg(test)]
#[path = "replication_tests.rs"]
mod tests;
