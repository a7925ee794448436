//! Recursive container traversal with definition hoisting.

use drafter_geom::Transformation;
use drafter_model::{Extrusion, Group, Model, ModelElement, Sketch, SketchElement};
use sha2::{Digest, Sha256};

use crate::entity::{primitive_line, transformation_literal};
use crate::registry::DefinitionRegistry;
use crate::units::quantity_literal;
use crate::ExportError;

/// Defensive bound on container nesting. The tree is owned and therefore
/// acyclic, but a pathological input should fail before the stack does.
pub(crate) const MAX_DEPTH: usize = 64;

#[derive(Clone, Copy)]
enum DefinitionKind {
    Model,
    Group,
    Extrusion,
}

impl DefinitionKind {
    fn tag(self) -> &'static str {
        match self {
            DefinitionKind::Model => "Model",
            DefinitionKind::Group => "Group",
            DefinitionKind::Extrusion => "Extrusion",
        }
    }

    fn param(self) -> char {
        match self {
            DefinitionKind::Model => 'm',
            DefinitionKind::Group => 'g',
            DefinitionKind::Extrusion => 'e',
        }
    }

    /// Collection token the definition's own body lines are emitted against.
    fn collection(self) -> &'static str {
        match self {
            DefinitionKind::Model => "m.entities",
            DefinitionKind::Group => "g.entities",
            DefinitionKind::Extrusion => "e.entities",
        }
    }
}

/// One export pass: owns the definition registry for its lifetime.
pub(crate) struct Exporter {
    pub(crate) registry: DefinitionRegistry,
}

impl Exporter {
    pub(crate) fn new() -> Self {
        Self {
            registry: DefinitionRegistry::new(),
        }
    }

    /// Lines for a model against `collection`. A transformed model is
    /// hoisted into a definition and referenced by a single instance line.
    pub(crate) fn model_lines(
        &mut self,
        model: &Model,
        collection: &str,
        depth: usize,
    ) -> Result<Vec<String>, ExportError> {
        check_depth(depth)?;
        match active(&model.transformation) {
            Some(t) => {
                let kind = DefinitionKind::Model;
                let body = self.elements_lines(&model.elements, kind.collection(), depth + 1)?;
                Ok(vec![self.instance_line(kind, body, t, collection)?])
            }
            None => self.elements_lines(&model.elements, collection, depth + 1),
        }
    }

    /// Lines for a group; same hoisting rule as models.
    pub(crate) fn group_lines(
        &mut self,
        group: &Group,
        collection: &str,
        depth: usize,
    ) -> Result<Vec<String>, ExportError> {
        check_depth(depth)?;
        match active(&group.transformation) {
            Some(t) => {
                let kind = DefinitionKind::Group;
                let body = self.elements_lines(&group.elements, kind.collection(), depth + 1)?;
                Ok(vec![self.instance_line(kind, body, t, collection)?])
            }
            None => self.elements_lines(&group.elements, collection, depth + 1),
        }
    }

    /// Lines for an extrusion: the sketch's lines, each suffixed with a
    /// pushpull of the negated length (SketchUp pulls against the face
    /// winding). A transformed extrusion is hoisted like a group.
    pub(crate) fn extrusion_lines(
        &mut self,
        extrusion: &Extrusion,
        collection: &str,
        depth: usize,
    ) -> Result<Vec<String>, ExportError> {
        check_depth(depth)?;
        let negated = -extrusion.length;
        let suffix = format!(".pushpull({})", quantity_literal(&negated)?);
        match active(&extrusion.transformation) {
            Some(t) => {
                let kind = DefinitionKind::Extrusion;
                let mut body =
                    self.sketch_lines(&extrusion.sketch, kind.collection(), None, depth + 1)?;
                for line in &mut body {
                    line.push_str(&suffix);
                }
                Ok(vec![self.instance_line(kind, body, t, collection)?])
            }
            None => {
                let mut lines =
                    self.sketch_lines(&extrusion.sketch, collection, None, depth + 1)?;
                for line in &mut lines {
                    line.push_str(&suffix);
                }
                Ok(lines)
            }
        }
    }

    /// Lines for a sketch. Nested sketch groups always inline; a group's
    /// own transformation becomes the ambient transformation for its direct
    /// children, replacing whatever was ambient outside it.
    pub(crate) fn sketch_lines(
        &mut self,
        sketch: &Sketch,
        collection: &str,
        ambient: Option<&Transformation>,
        depth: usize,
    ) -> Result<Vec<String>, ExportError> {
        check_depth(depth)?;
        let mut lines = Vec::new();
        for element in &sketch.elements {
            match element {
                SketchElement::Primitive(primitive) => {
                    lines.push(primitive_line(primitive, collection, ambient)?);
                }
                SketchElement::Group(group) => {
                    let inner = active(&group.transformation);
                    lines.extend(self.sketch_lines(&group.sketch, collection, inner, depth + 1)?);
                }
            }
        }
        Ok(lines)
    }

    fn elements_lines(
        &mut self,
        elements: &[ModelElement],
        collection: &str,
        depth: usize,
    ) -> Result<Vec<String>, ExportError> {
        let mut lines = Vec::new();
        for element in elements {
            match element {
                ModelElement::Model(model) => {
                    lines.extend(self.model_lines(model, collection, depth)?);
                }
                ModelElement::Group(group) => {
                    lines.extend(self.group_lines(group, collection, depth)?);
                }
                ModelElement::Extrusion(extrusion) => {
                    lines.extend(self.extrusion_lines(extrusion, collection, depth)?);
                }
            }
        }
        Ok(lines)
    }

    /// Register `body` as a definition (once per structural key) and return
    /// the instance line referencing it.
    fn instance_line(
        &mut self,
        kind: DefinitionKind,
        body: Vec<String>,
        transformation: &Transformation,
        collection: &str,
    ) -> Result<String, ExportError> {
        let key = structural_key(kind, &body);
        let name = match self.registry.name_for(&key) {
            Some(existing) => existing.to_string(),
            None => {
                let name = format!("{}_{}", kind.tag(), short_digest(&key));
                let block = definition_block(kind.param(), &name, &body);
                self.registry.register(key, name.clone(), block);
                name
            }
        };
        Ok(format!(
            "{collection}.add_instance(model.definitions['{name}'], {})",
            transformation_literal(transformation)?
        ))
    }
}

fn active(transformation: &Option<Transformation>) -> Option<&Transformation> {
    transformation.as_ref().filter(|t| !t.is_identity())
}

fn check_depth(depth: usize) -> Result<(), ExportError> {
    if depth > MAX_DEPTH {
        Err(ExportError::NestingTooDeep(depth))
    } else {
        Ok(())
    }
}

/// Kind tag plus rendered body text. Body lines never contain newlines, so
/// the joined form is unambiguous; lengths, units and nested definition
/// names are already embedded in the rendered lines.
fn structural_key(kind: DefinitionKind, body: &[String]) -> String {
    let mut key = String::from(kind.tag());
    for line in body {
        key.push('\n');
        key.push_str(line);
    }
    key
}

fn short_digest(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    digest[..4].iter().map(|b| format!("{b:02x}")).collect()
}

fn definition_block(param: char, name: &str, body: &[String]) -> String {
    let mut block = format!("lambda {{|{param}|\n");
    for line in body {
        block.push('\t');
        block.push_str(line);
        block.push('\n');
    }
    block.push_str(&format!("}}.call(model.definitions.add('{name}'))"));
    block
}
