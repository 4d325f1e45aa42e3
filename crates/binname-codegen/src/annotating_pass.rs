//! Annotating pass: names class-like entities, records closures and marks
//! SAM-adapted arguments for one compilation unit.
//!
//! The walk is depth-first in lexical order. Class-like declarations are
//! named and recorded before their bodies are visited, so every nested
//! entity sees its enclosing entity's final binary name on top of the naming
//! context. Call, operator and index expressions are checked for SAM
//! adapters after their children.
//!
//! The tree and the resolution store are only read; all output goes to
//! [`CodegenBindings`]. Synthetic closure classes are created through the
//! [`ClosureClassFactory`] passed in, never in the store.

use crate::anonymous_names::AnonymousCounter;
use crate::bindings::CodegenBindings;
use crate::closure_recorder::{ClosureRecorder, ClosureRequest};
use crate::error::{AnnotateResult, AnnotationError};
use crate::naming::{class_name, companion_name, member_name, package_internal_name};
use crate::naming_context::NamingContext;
use crate::options::AnnotateOptions;
use crate::sam_annotator::{SamAnnotations, SamAnnotator};
use binname_resolve::{ClosureClassFactory, ClosureShape, ResolutionStore, SymbolId};
use binname_syntax::{
    CallableReferenceData, EnumEntryData, FileData, NodeArena, NodeData, NodeIndex, NodeKind,
    PropertyData,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, debug_span, trace};

/// Counters reported after a unit has been annotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateStats {
    pub frames_entered: u32,
    pub frames_left: u32,
    pub closures: u32,
    pub anonymous_names: u32,
    pub sam_annotations: u32,
    /// Declarations skipped because partial analysis left them unresolved.
    pub skipped_subtrees: u32,
}

#[derive(Debug)]
pub struct AnnotateOutput {
    pub bindings: CodegenBindings,
    pub stats: AnnotateStats,
}

pub struct AnnotatingPass<'a, R: ResolutionStore + ?Sized> {
    arena: &'a NodeArena,
    store: &'a R,
    factory: &'a mut dyn ClosureClassFactory,
    options: &'a AnnotateOptions,
    naming: NamingContext,
    anonymous: AnonymousCounter,
    bindings: CodegenBindings,
    skipped_subtrees: u32,
    /// Current recursion depth, bounded by `options.max_depth`
    visit_depth: u32,
}

impl<'a, R: ResolutionStore + ?Sized> AnnotatingPass<'a, R> {
    pub fn new(
        arena: &'a NodeArena,
        store: &'a R,
        factory: &'a mut dyn ClosureClassFactory,
        options: &'a AnnotateOptions,
    ) -> Self {
        AnnotatingPass {
            arena,
            store,
            factory,
            options,
            naming: NamingContext::new(),
            anonymous: AnonymousCounter::new(),
            bindings: CodegenBindings::new(),
            skipped_subtrees: 0,
            visit_depth: 0,
        }
    }

    /// Annotate the unit rooted at `root` (normally a file node).
    ///
    /// On error the unit produced no usable facts; the partial bindings are
    /// dropped with the pass.
    pub fn run(mut self, root: NodeIndex) -> AnnotateResult<AnnotateOutput> {
        let span = debug_span!("annotate_unit", root = root.0);
        let _enter = span.enter();

        self.visit(root)?;
        if !self.naming.is_empty() {
            return Err(AnnotationError::UnbalancedNamingStack {
                depth: self.naming.depth(),
            });
        }

        let frames = self.naming.stats();
        let stats = AnnotateStats {
            frames_entered: frames.entered,
            frames_left: frames.left,
            closures: self.bindings.closure_count() as u32,
            anonymous_names: self.anonymous.invented(),
            sam_annotations: self.bindings.sam_count() as u32,
            skipped_subtrees: self.skipped_subtrees,
        };
        debug!(
            "[annotate] root={} frames={} closures={} sam={} skipped={}",
            root.0, stats.frames_entered, stats.closures, stats.sam_annotations, stats.skipped_subtrees
        );
        Ok(AnnotateOutput {
            bindings: self.bindings,
            stats,
        })
    }

    fn visit(&mut self, idx: NodeIndex) -> AnnotateResult<()> {
        if idx.is_none() {
            return Ok(());
        }
        if self.visit_depth >= self.options.max_depth {
            return Err(AnnotationError::DepthLimitExceeded {
                node: idx,
                limit: self.options.max_depth,
            });
        }
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return Err(AnnotationError::MissingNode { node: idx });
        };

        self.visit_depth += 1;
        let result = self.visit_node(idx, &node.data);
        self.visit_depth -= 1;
        result
    }

    fn visit_node(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        match data {
            NodeData::File(file) => self.visit_file(idx, file),
            NodeData::Class(_) | NodeData::Object(_) => self.visit_named_class(idx, data),
            NodeData::CompanionObject(_) => self.visit_companion_object(idx, data),
            NodeData::EnumEntry(entry) => self.visit_enum_entry(idx, entry, data),
            NodeData::Property(property) => self.visit_property(idx, property, data),
            NodeData::NamedFunction(_) => self.visit_named_function(idx, data),
            NodeData::FunctionLiteral(_) => self.visit_function_literal(idx, data),
            NodeData::ObjectLiteral(_) => self.visit_object_literal(idx, data),
            NodeData::CallableReference(reference) => {
                self.visit_callable_reference(idx, reference, data)
            }
            NodeData::Call(_) => {
                self.visit_children(data)?;
                let annotations = self.sam_annotator().annotate_call(idx)?;
                self.record_sam_values(annotations)
            }
            NodeData::Binary(binary) => {
                self.visit_children(data)?;
                let annotations = self.sam_annotator().annotate_binary(idx, binary)?;
                self.record_sam_values(annotations)
            }
            NodeData::Index(index) => {
                self.visit_children(data)?;
                let annotations = self.sam_annotator().annotate_index(idx, index)?;
                self.record_sam_values(annotations)
            }
            NodeData::Other(_) => self.visit_children(data),
        }
    }

    fn visit_children(&mut self, data: &'a NodeData) -> AnnotateResult<()> {
        for child in data.children() {
            self.visit(child)?;
        }
        Ok(())
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Run `f` inside a naming frame. The frame is left on every path.
    fn with_frame(
        &mut self,
        symbol: Option<SymbolId>,
        name: Arc<str>,
        f: impl FnOnce(&mut Self) -> AnnotateResult<()>,
    ) -> AnnotateResult<()> {
        trace!("[annotate] enter {name}");
        self.scoped(|naming| naming.enter(symbol, name), f)
    }

    /// Name-only frame for members: the enclosing class does not change.
    fn with_member_frame(
        &mut self,
        name: Arc<str>,
        f: impl FnOnce(&mut Self) -> AnnotateResult<()>,
    ) -> AnnotateResult<()> {
        trace!("[annotate] enter member {name}");
        self.scoped(|naming| naming.enter_member(name), f)
    }

    fn scoped(
        &mut self,
        enter: impl FnOnce(&mut NamingContext),
        f: impl FnOnce(&mut Self) -> AnnotateResult<()>,
    ) -> AnnotateResult<()> {
        enter(&mut self.naming);
        let result = f(self);
        let left = self.naming.leave();
        result.and(left)
    }

    fn current_name(&self) -> AnnotateResult<Arc<str>> {
        self.naming.current_name().map(Arc::clone)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn visit_file(&mut self, idx: NodeIndex, file: &'a FileData) -> AnnotateResult<()> {
        let package = package_internal_name(&file.package);

        if !file.is_script {
            debug!("[annotate] file {} package '{}'", file.file_name, package);
            return self.with_frame(None, Arc::from(package), |this| {
                file.declarations.iter().try_for_each(|child| this.visit(child))
            });
        }

        let script = self.store.script_class(idx);
        let Some(script) = self.unresolved_or(idx, NodeKind::File, script)? else {
            return Ok(());
        };
        let simple = self.symbol_name(idx, NodeKind::File, script)?;
        let name = class_name(&package, &simple, true);
        self.assign_binary_name(idx, script, Arc::clone(&name))?;
        debug!("[annotate] script {} class {}", file.file_name, name);
        self.with_frame(Some(script), name, |this| {
            file.declarations.iter().try_for_each(|child| this.visit(child))
        })
    }

    /// Class, interface, enum class or object declaration.
    fn visit_named_class(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        let kind = data.kind();
        let Some(class) = self.declared(idx, kind)? else {
            return Ok(());
        };
        let simple = self.symbol_name(idx, kind, class)?;
        let base = self.current_name()?;
        let name = class_name(&base, &simple, self.store.is_top_level(class));

        self.record_closure(idx, class, self.store.container(class), Arc::clone(&name), false)?;
        self.with_frame(Some(class), name, |this| this.visit_children(data))
    }

    fn visit_companion_object(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        // Companions are resolved together with their class, even in partial
        // analysis.
        let class = self
            .store
            .declared_symbol(idx)
            .ok_or(AnnotationError::MissingResolution {
                node: idx,
                kind: NodeKind::CompanionObject,
            })?;
        let name = companion_name(&self.current_name()?, self.options);

        self.record_closure(idx, class, self.store.container(class), Arc::clone(&name), false)?;
        self.with_frame(Some(class), name, |this| this.visit_children(data))
    }

    fn visit_enum_entry(
        &mut self,
        idx: NodeIndex,
        entry: &'a EnumEntryData,
        data: &'a NodeData,
    ) -> AnnotateResult<()> {
        let symbol = self
            .store
            .declared_symbol(idx)
            .ok_or(AnnotationError::MissingResolution {
                node: idx,
                kind: NodeKind::EnumEntry,
            })?;

        if !entry.is_trivial() {
            self.bindings.mark_enum_entry_needs_subclass(symbol);
            return self.visit_named_class(idx, data);
        }

        // A trivial entry is an instance of the enum class itself.
        let enum_name = self
            .naming
            .current_symbol()
            .and_then(|enum_class| self.bindings.binary_name(enum_class))
            .map(Arc::clone)
            .ok_or(AnnotationError::MissingEnumClassName { node: idx })?;
        trace!("[annotate] trivial enum entry {} -> {enum_name}", entry.name);
        self.bindings.alias_binary_name(symbol, enum_name);

        for argument in entry.arguments.iter() {
            self.visit(argument)?;
        }
        Ok(())
    }

    fn visit_property(
        &mut self,
        idx: NodeIndex,
        property: &'a PropertyData,
        data: &'a NodeData,
    ) -> AnnotateResult<()> {
        let Some(symbol) = self.declared(idx, NodeKind::Property)? else {
            return Ok(());
        };
        let base = self.current_name()?;
        let name = member_name(self.store, symbol, &base, self.options)
            .unwrap_or_else(|| Arc::from(format!("{base}${}", property.name)));
        self.with_member_frame(name, |this| this.visit_children(data))
    }

    fn visit_named_function(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        let Some(function) = self.declared(idx, NodeKind::NamedFunction)? else {
            return Ok(());
        };
        let base = self.current_name()?;
        match member_name(self.store, function, &base, self.options) {
            Some(name) => self.with_member_frame(name, |this| this.visit_children(data)),
            None => self.visit_closure(idx, data, function, function, ClosureShape::Literal),
        }
    }

    // =========================================================================
    // Anonymous entities
    // =========================================================================

    fn visit_function_literal(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        let Some(function) = self.declared(idx, NodeKind::FunctionLiteral)? else {
            return Ok(());
        };
        self.visit_closure(idx, data, function, function, ClosureShape::Literal)
    }

    fn visit_callable_reference(
        &mut self,
        idx: NodeIndex,
        reference: &'a CallableReferenceData,
        data: &'a NodeData,
    ) -> AnnotateResult<()> {
        let Some(function) = self.declared(idx, NodeKind::CallableReference)? else {
            return Ok(());
        };
        let referenced = self
            .store
            .resolved_call(reference.callee)
            .map(|call| call.resulting_descriptor);
        let Some(referenced) = self.unresolved_or(idx, NodeKind::CallableReference, referenced)?
        else {
            return Ok(());
        };
        self.visit_closure(idx, data, function, referenced, ClosureShape::Reference)
    }

    fn visit_object_literal(&mut self, idx: NodeIndex, data: &'a NodeData) -> AnnotateResult<()> {
        let Some(class) = self.store.declared_symbol(idx) else {
            if !self.store.analysis_mode().is_partial() {
                return Err(AnnotationError::MissingResolution {
                    node: idx,
                    kind: NodeKind::ObjectLiteral,
                });
            }
            // The body may still hold resolved lambdas.
            self.skipped_subtrees += 1;
            return self.visit_children(data);
        };

        let scope = self.current_name()?;
        let name = self.anonymous.invent_for(idx, NodeKind::ObjectLiteral, &scope)?;
        self.record_closure(idx, class, self.store.container(class), Arc::clone(&name), false)?;
        self.with_frame(Some(class), name, |this| this.visit_children(data))
    }

    /// Lambda, callable reference or local function: invent a name, create
    /// the closure class and descend inside its frame.
    fn visit_closure(
        &mut self,
        idx: NodeIndex,
        data: &'a NodeData,
        function: SymbolId,
        supertype_source: SymbolId,
        shape: ClosureShape,
    ) -> AnnotateResult<()> {
        let scope = self.current_name()?;
        let name = self.anonymous.invent_for(idx, data.kind(), &scope)?;
        let supertype = self
            .store
            .closure_supertype(supertype_source, shape)
            .ok_or(AnnotationError::NotAFunction {
                node: idx,
                symbol: supertype_source,
            })?;

        let container = self.store.container(function);
        let class = self.factory.create_closure_class(
            function,
            container.unwrap_or(SymbolId::NONE),
            supertype,
        );
        self.bindings.record_class_for_function(function, class);
        self.record_closure(idx, class, container, Arc::clone(&name), true)?;
        self.with_frame(Some(class), name, |this| this.visit_children(data))
    }

    // =========================================================================
    // Sink helpers
    // =========================================================================

    fn record_closure(
        &mut self,
        idx: NodeIndex,
        class: SymbolId,
        container: Option<SymbolId>,
        binary_name: Arc<str>,
        is_function_literal: bool,
    ) -> AnnotateResult<()> {
        let request = ClosureRequest {
            node: idx,
            class,
            enclosing: self.naming.current_symbol(),
            container,
            binary_name,
            is_function_literal,
        };
        ClosureRecorder::new(self.store, self.options.check_unique_names)
            .record(&mut self.bindings, request)
    }

    fn assign_binary_name(
        &mut self,
        idx: NodeIndex,
        symbol: SymbolId,
        name: Arc<str>,
    ) -> AnnotateResult<()> {
        match self.bindings.insert_binary_name(symbol, Arc::clone(&name)) {
            Some(existing) if self.options.check_unique_names => {
                Err(AnnotationError::DuplicateBinaryName {
                    node: idx,
                    name: name.to_string(),
                    symbol,
                    existing,
                })
            }
            _ => Ok(()),
        }
    }

    fn record_sam_values(&mut self, annotations: SamAnnotations) -> AnnotateResult<()> {
        for annotation in annotations {
            match self.bindings.sam_value(annotation.argument) {
                Some(existing) if existing == annotation.interface => continue,
                Some(_) => {
                    return Err(AnnotationError::DuplicateAnnotation {
                        node: annotation.argument,
                        what: "SAM annotation",
                    });
                }
                None => {}
            }
            trace!(
                argument = annotation.argument.0,
                interface = %annotation.interface,
                "[annotate] SAM value"
            );
            self.bindings
                .record_sam_value(annotation.argument, annotation.interface);
        }
        Ok(())
    }

    fn sam_annotator(&self) -> SamAnnotator<'a, R> {
        SamAnnotator::new(self.arena, self.store)
    }

    // =========================================================================
    // Resolution lookups
    // =========================================================================

    /// Symbol declared at `idx`; `None` means the subtree is skipped.
    fn declared(&mut self, idx: NodeIndex, kind: NodeKind) -> AnnotateResult<Option<SymbolId>> {
        let symbol = self.store.declared_symbol(idx);
        self.unresolved_or(idx, kind, symbol)
    }

    /// Pass `resolved` through, or decide what a missing resolution means
    /// under the store's analysis mode.
    fn unresolved_or<T>(
        &mut self,
        idx: NodeIndex,
        kind: NodeKind,
        resolved: Option<T>,
    ) -> AnnotateResult<Option<T>> {
        match resolved {
            Some(value) => Ok(Some(value)),
            None if self.store.analysis_mode().is_partial() => {
                trace!("[annotate] skipping unresolved {kind} at {idx}");
                self.skipped_subtrees += 1;
                Ok(None)
            }
            None => Err(AnnotationError::MissingResolution { node: idx, kind }),
        }
    }

    fn symbol_name(
        &self,
        idx: NodeIndex,
        kind: NodeKind,
        symbol: SymbolId,
    ) -> AnnotateResult<Arc<str>> {
        self.store
            .symbol(symbol)
            .map(|symbol| Arc::clone(&symbol.name))
            .ok_or(AnnotationError::MissingResolution { node: idx, kind })
    }
}

#[cfg(test)]
#[path = "../tests/annotating_pass_tests.rs"]
mod tests;
