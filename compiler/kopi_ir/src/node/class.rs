//! Class and interface declarations.

use std::fmt;
use std::ops::Deref;

use rustc_hash::FxHashSet;

use crate::builder::{check_import_path, check_qualified_name, check_type_text};
use crate::syntax;

use super::{
    ensure_editable, ensure_same_mode, validate, Annotation, AnnotationMut, Field, FieldMut,
    Javadoc, JavadocMut, Method, MethodMut, MultiLineComment, Mutability, NodeError, NodeKind,
    SingleLineComment, Visibility,
};

/// Which typed child list an [`ElementRef`] indexes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    InnerClass,
    Field,
    Method,
    SingleLineComment,
    MultiLineComment,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::InnerClass => "inner class",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
            ElementKind::SingleLineComment => "single-line comment",
            ElementKind::MultiLineComment => "multi-line comment",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of one class body element: a kind tag plus an index into the
/// matching typed list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRef {
    pub kind: ElementKind,
    pub index: usize,
}

impl ElementRef {
    #[inline]
    pub const fn new(kind: ElementKind, index: usize) -> Self {
        ElementRef { kind, index }
    }
}

/// A class or interface, outer (a whole file) or inner.
///
/// Body elements live in typed lists. The optional element order records
/// how they interleave; without it the natural order applies: single-line
/// comments, multi-line comments, inner classes, fields, methods.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    pub(crate) mode: Mutability,
    pub(crate) is_inner_class: bool,
    pub(crate) is_interface: bool,
    pub(crate) package: Option<String>,
    pub(crate) imports: Vec<String>,
    pub(crate) static_imports: Vec<String>,
    pub(crate) javadoc: Option<Javadoc>,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) visibility: Visibility,
    pub(crate) is_static: bool,
    pub(crate) is_abstract: bool,
    pub(crate) is_final: bool,
    pub(crate) name: String,
    pub(crate) superclass: Option<String>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) single_line_comments: Vec<SingleLineComment>,
    pub(crate) multi_line_comments: Vec<MultiLineComment>,
    pub(crate) inner_classes: Vec<Class>,
    pub(crate) fields: Vec<Field>,
    pub(crate) methods: Vec<Method>,
    pub(crate) element_order: Option<Vec<ElementRef>>,
}

impl Class {
    pub fn mutability(&self) -> Mutability {
        self.mode
    }

    pub fn is_inner_class(&self) -> bool {
        self.is_inner_class
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn static_imports(&self) -> &[String] {
        &self.static_imports
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Class name, including type parameters (`Box<T>`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without type parameters.
    pub fn simple_name(&self) -> &str {
        self.name
            .split_once('<')
            .map_or(self.name.as_str(), |(head, _)| head)
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// Implemented interfaces, or extended ones for an interface.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn single_line_comments(&self) -> &[SingleLineComment] {
        &self.single_line_comments
    }

    pub fn multi_line_comments(&self) -> &[MultiLineComment] {
        &self.multi_line_comments
    }

    pub fn inner_classes(&self) -> &[Class] {
        &self.inner_classes
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// First method with the given name; constructors have none.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .find(|method| method.name() == Some(name))
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|method| method.is_constructor())
    }

    pub fn inner_class(&self, name: &str) -> Option<&Class> {
        self.inner_classes
            .iter()
            .find(|class| class.simple_name() == name)
    }

    /// The explicit element order, if one was recorded.
    pub fn element_order(&self) -> Option<&[ElementRef]> {
        self.element_order.as_deref()
    }

    /// Body elements in print order.
    pub fn elements(&self) -> Vec<ElementRef> {
        if let Some(order) = &self.element_order {
            return order.clone();
        }
        let mut refs = Vec::with_capacity(self.element_count());
        let groups = [
            (ElementKind::SingleLineComment, self.single_line_comments.len()),
            (ElementKind::MultiLineComment, self.multi_line_comments.len()),
            (ElementKind::InnerClass, self.inner_classes.len()),
            (ElementKind::Field, self.fields.len()),
            (ElementKind::Method, self.methods.len()),
        ];
        for (kind, len) in groups {
            refs.extend((0..len).map(|index| ElementRef::new(kind, index)));
        }
        refs
    }

    /// Identifying text of one element: class name, field name, method
    /// signature or comment text.
    pub fn element_identity(&self, element: ElementRef) -> Option<String> {
        let index = element.index;
        match element.kind {
            ElementKind::InnerClass => self.inner_classes.get(index).map(|c| c.name.clone()),
            ElementKind::Field => self.fields.get(index).map(|f| f.name.clone()),
            ElementKind::Method => self.methods.get(index).map(Method::signature),
            ElementKind::SingleLineComment => self
                .single_line_comments
                .get(index)
                .map(|c| c.content.clone()),
            ElementKind::MultiLineComment => self
                .multi_line_comments
                .get(index)
                .map(|c| c.lines.join("\n")),
        }
    }

    fn element_count(&self) -> usize {
        self.single_line_comments.len()
            + self.multi_line_comments.len()
            + self.inner_classes.len()
            + self.fields.len()
            + self.methods.len()
    }

    fn len_of(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::InnerClass => self.inner_classes.len(),
            ElementKind::Field => self.fields.len(),
            ElementKind::Method => self.methods.len(),
            ElementKind::SingleLineComment => self.single_line_comments.len(),
            ElementKind::MultiLineComment => self.multi_line_comments.len(),
        }
    }

    /// Every way `order` fails to reference each child exactly once.
    pub(crate) fn element_order_violations(&self, order: &[ElementRef]) -> Vec<String> {
        let mut violations = Vec::new();
        let mut seen = FxHashSet::default();
        for element in order {
            if element.index >= self.len_of(element.kind) {
                violations.push(format!(
                    "Element order references missing {} #{}!",
                    element.kind, element.index
                ));
            } else if !seen.insert(*element) {
                violations.push(format!(
                    "Element order lists {} #{} more than once!",
                    element.kind, element.index
                ));
            }
        }
        if seen.len() != self.element_count() && violations.is_empty() {
            violations.push(format!(
                "Element order covers {} of {} elements!",
                seen.len(),
                self.element_count()
            ));
        }
        violations
    }

    pub fn edit(&mut self) -> Result<ClassMut<'_>, NodeError> {
        ensure_editable(NodeKind::Class, self.mode)?;
        Ok(ClassMut { node: self })
    }

    #[must_use]
    pub fn into_fixed(self) -> Self {
        Class {
            mode: Mutability::Fixed,
            javadoc: self.javadoc.map(Javadoc::into_fixed),
            annotations: self
                .annotations
                .into_iter()
                .map(Annotation::into_fixed)
                .collect(),
            single_line_comments: self
                .single_line_comments
                .into_iter()
                .map(SingleLineComment::into_fixed)
                .collect(),
            multi_line_comments: self
                .multi_line_comments
                .into_iter()
                .map(MultiLineComment::into_fixed)
                .collect(),
            inner_classes: self
                .inner_classes
                .into_iter()
                .map(Class::into_fixed)
                .collect(),
            fields: self.fields.into_iter().map(Field::into_fixed).collect(),
            methods: self.methods.into_iter().map(Method::into_fixed).collect(),
            ..self
        }
    }
}

/// Mutators of an editable [`Class`].
///
/// Children must share the class's mode. Existing children are edited
/// through their own editors, never handed out raw, so nothing can slip a
/// fixed child or an outer class into the tree. When an element order is
/// recorded, added children are appended to it.
pub struct ClassMut<'a> {
    node: &'a mut Class,
}

impl Deref for ClassMut<'_> {
    type Target = Class;

    fn deref(&self) -> &Class {
        self.node
    }
}

impl ClassMut<'_> {
    fn check_child(&self, child: &'static str, mode: Mutability) -> Result<(), NodeError> {
        ensure_same_mode(NodeKind::Class, self.node.mode, child, mode)
    }

    fn record(&mut self, kind: ElementKind, index: usize) {
        if let Some(order) = &mut self.node.element_order {
            order.push(ElementRef::new(kind, index));
        }
    }

    /// Drop `kind #index` from the recorded order, shifting later indices.
    fn forget(&mut self, kind: ElementKind, index: usize) {
        if let Some(order) = &mut self.node.element_order {
            order.retain(|e| !(e.kind == kind && e.index == index));
            for element in order.iter_mut() {
                if element.kind == kind && element.index > index {
                    element.index -= 1;
                }
            }
        }
    }

    fn ensure_outer(&self, message: &str) -> Result<(), NodeError> {
        if self.node.is_inner_class {
            Err(NodeError::InvalidChild(message.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn set_package(&mut self, package: Option<String>) -> Result<&mut Self, NodeError> {
        if let Some(package) = &package {
            self.ensure_outer("Inner class cannot have a package!")?;
            validate(|v| check_qualified_name(v, "Package", package))?;
        }
        self.node.package = package;
        Ok(self)
    }

    pub fn add_import(&mut self, import: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.ensure_outer("Inner class cannot have imports!")?;
        let import = import.into();
        validate(|v| check_import_path(v, &import))?;
        self.node.imports.push(import);
        Ok(self)
    }

    pub fn add_static_import(&mut self, import: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.ensure_outer("Inner class cannot have imports!")?;
        let import = import.into();
        validate(|v| check_import_path(v, &import))?;
        self.node.static_imports.push(import);
        Ok(self)
    }

    pub fn set_javadoc(&mut self, javadoc: Option<Javadoc>) -> Result<&mut Self, NodeError> {
        if let Some(doc) = &javadoc {
            self.check_child("javadoc", doc.mode)?;
        }
        self.node.javadoc = javadoc;
        Ok(self)
    }

    pub fn javadoc_mut(&mut self) -> Option<JavadocMut<'_>> {
        self.node.javadoc.as_mut().and_then(|doc| doc.edit().ok())
    }

    pub fn add_annotation(&mut self, annotation: Annotation) -> Result<&mut Self, NodeError> {
        self.check_child("annotations", annotation.mode)?;
        self.node.annotations.push(annotation);
        Ok(self)
    }

    pub fn annotations_mut(&mut self) -> impl Iterator<Item = AnnotationMut<'_>> {
        self.node
            .annotations
            .iter_mut()
            .map(Annotation::edit)
            .filter_map(Result::ok)
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> &mut Self {
        self.node.visibility = visibility;
        self
    }

    pub fn set_static(&mut self, is_static: bool) -> &mut Self {
        self.node.is_static = is_static;
        self
    }

    pub fn set_abstract(&mut self, is_abstract: bool) -> &mut Self {
        self.node.is_abstract = is_abstract;
        self
    }

    pub fn set_final(&mut self, is_final: bool) -> &mut Self {
        self.node.is_final = is_final;
        self
    }

    /// Stores the canonical spelling, type parameters included.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.node.name = validate(|v| {
            check_type_text(v, "class name", name.into(), syntax::canonical_class_name)
        })?;
        Ok(self)
    }

    pub fn set_superclass(&mut self, superclass: Option<String>) -> Result<&mut Self, NodeError> {
        self.node.superclass = match superclass {
            Some(text) => Some(validate(|v| {
                check_type_text(v, "superclass", text, syntax::canonical_type)
            })?),
            None => None,
        };
        Ok(self)
    }

    pub fn add_interface(&mut self, interface: impl Into<String>) -> Result<&mut Self, NodeError> {
        let interface = validate(|v| {
            check_type_text(v, "interface", interface.into(), syntax::canonical_type)
        })?;
        self.node.interfaces.push(interface);
        Ok(self)
    }

    pub fn add_single_line_comment(
        &mut self,
        comment: SingleLineComment,
    ) -> Result<&mut Self, NodeError> {
        self.check_child("comments", comment.mode)?;
        self.node.single_line_comments.push(comment);
        self.record(
            ElementKind::SingleLineComment,
            self.node.single_line_comments.len() - 1,
        );
        Ok(self)
    }

    pub fn add_multi_line_comment(
        &mut self,
        comment: MultiLineComment,
    ) -> Result<&mut Self, NodeError> {
        self.check_child("comments", comment.mode)?;
        self.node.multi_line_comments.push(comment);
        self.record(
            ElementKind::MultiLineComment,
            self.node.multi_line_comments.len() - 1,
        );
        Ok(self)
    }

    pub fn add_inner_class(&mut self, class: Class) -> Result<&mut Self, NodeError> {
        self.check_child("inner classes", class.mode)?;
        if !class.is_inner_class {
            return Err(NodeError::InvalidChild(format!(
                "Class {} must be marked inner to be nested!",
                class.name
            )));
        }
        self.node.inner_classes.push(class);
        self.record(ElementKind::InnerClass, self.node.inner_classes.len() - 1);
        Ok(self)
    }

    pub fn inner_class_mut(&mut self, index: usize) -> Option<ClassMut<'_>> {
        self.node
            .inner_classes
            .get_mut(index)
            .and_then(|class| class.edit().ok())
    }

    pub fn inner_classes_mut(&mut self) -> impl Iterator<Item = ClassMut<'_>> {
        self.node
            .inner_classes
            .iter_mut()
            .map(Class::edit)
            .filter_map(Result::ok)
    }

    pub fn add_field(&mut self, field: Field) -> Result<&mut Self, NodeError> {
        self.check_child("fields", field.mode)?;
        self.node.fields.push(field);
        self.record(ElementKind::Field, self.node.fields.len() - 1);
        Ok(self)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        self.node
            .fields
            .get_mut(index)
            .and_then(|field| field.edit().ok())
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = FieldMut<'_>> {
        self.node
            .fields
            .iter_mut()
            .map(Field::edit)
            .filter_map(Result::ok)
    }

    pub fn remove_field(&mut self, index: usize) -> Option<Field> {
        if index >= self.node.fields.len() {
            return None;
        }
        self.forget(ElementKind::Field, index);
        Some(self.node.fields.remove(index))
    }

    pub fn add_method(&mut self, method: Method) -> Result<&mut Self, NodeError> {
        self.check_child("methods", method.mode)?;
        self.node.methods.push(method);
        self.record(ElementKind::Method, self.node.methods.len() - 1);
        Ok(self)
    }

    pub fn method_mut(&mut self, index: usize) -> Option<MethodMut<'_>> {
        self.node
            .methods
            .get_mut(index)
            .and_then(|method| method.edit().ok())
    }

    pub fn methods_mut(&mut self) -> impl Iterator<Item = MethodMut<'_>> {
        self.node
            .methods
            .iter_mut()
            .map(Method::edit)
            .filter_map(Result::ok)
    }

    pub fn remove_method(&mut self, index: usize) -> Option<Method> {
        if index >= self.node.methods.len() {
            return None;
        }
        self.forget(ElementKind::Method, index);
        Some(self.node.methods.remove(index))
    }

    /// Record an explicit order; `None` restores the natural order.
    pub fn set_element_order(
        &mut self,
        order: Option<Vec<ElementRef>>,
    ) -> Result<&mut Self, NodeError> {
        if let Some(order) = &order {
            let violations = self.node.element_order_violations(order);
            if !violations.is_empty() {
                return Err(NodeError::InvalidElementOrder(violations.join("; ")));
            }
        }
        self.node.element_order = order;
        Ok(self)
    }
}
