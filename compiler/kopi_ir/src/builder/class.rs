use crate::node::{
    Annotation, Class, ElementRef, Field, Javadoc, Method, MultiLineComment, Mutability, NodeKind,
    SingleLineComment, Visibility,
};
use crate::syntax;

use super::{
    check_import_path, check_mode, check_modes, check_qualified_name, check_type_text, BuildError,
};

/// Builds a [`Class`]. The name is required.
///
/// Outer classes may carry a package and imports; inner classes may not.
/// Every violation is collected, so a class with five mismatched child
/// categories reports all five.
#[derive(Clone, Debug, Default)]
pub struct ClassBuilder {
    mode: Mutability,
    is_inner_class: bool,
    is_interface: bool,
    package: Option<String>,
    imports: Vec<String>,
    static_imports: Vec<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    name: Option<String>,
    superclass: Option<String>,
    interfaces: Vec<String>,
    single_line_comments: Vec<SingleLineComment>,
    multi_line_comments: Vec<MultiLineComment>,
    inner_classes: Vec<Class>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    element_order: Option<Vec<ElementRef>>,
}

impl ClassBuilder {
    pub fn new(mode: Mutability) -> Self {
        ClassBuilder {
            mode,
            ..Self::default()
        }
    }

    pub fn editable() -> Self {
        Self::new(Mutability::Editable)
    }

    pub fn fixed() -> Self {
        Self::new(Mutability::Fixed)
    }

    #[must_use]
    pub fn inner(mut self, is_inner_class: bool) -> Self {
        self.is_inner_class = is_inner_class;
        self
    }

    #[must_use]
    pub fn interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    #[must_use]
    pub fn with_static_import(mut self, import: impl Into<String>) -> Self {
        self.static_imports.push(import.into());
        self
    }

    #[must_use]
    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Class name, optionally with type parameters.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// An implemented interface, or an extended one for interfaces.
    #[must_use]
    pub fn with_implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    #[must_use]
    pub fn with_single_line_comment(mut self, comment: SingleLineComment) -> Self {
        self.single_line_comments.push(comment);
        self
    }

    #[must_use]
    pub fn with_multi_line_comment(mut self, comment: MultiLineComment) -> Self {
        self.multi_line_comments.push(comment);
        self
    }

    #[must_use]
    pub fn with_inner_class(mut self, class: Class) -> Self {
        self.inner_classes.push(class);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Explicit print order; must reference every child exactly once.
    #[must_use]
    pub fn with_element_order(mut self, order: Vec<ElementRef>) -> Self {
        self.element_order = Some(order);
        self
    }

    pub fn build(self) -> Result<Class, BuildError> {
        let mut violations = Vec::new();
        let mode = self.mode;
        let name = self.name.filter(|n| !n.trim().is_empty()).map(|n| {
            check_type_text(&mut violations, "class name", n, syntax::canonical_class_name)
        });
        if name.is_none() {
            violations.push("Must specify className!".to_string());
        }
        let superclass = self
            .superclass
            .map(|t| check_type_text(&mut violations, "superclass", t, syntax::canonical_type));
        let interfaces: Vec<String> = self
            .interfaces
            .into_iter()
            .map(|t| check_type_text(&mut violations, "interface", t, syntax::canonical_type))
            .collect();
        if let Some(package) = &self.package {
            check_qualified_name(&mut violations, "Package", package);
        }
        for import in self.imports.iter().chain(&self.static_imports) {
            check_import_path(&mut violations, import);
        }
        if self.is_inner_class {
            if self.package.is_some() {
                violations.push("Inner class cannot have a package!".to_string());
            }
            if !self.imports.is_empty() || !self.static_imports.is_empty() {
                violations.push("Inner class cannot have imports!".to_string());
            }
        }
        for inner in self.inner_classes.iter().filter(|c| !c.is_inner_class) {
            violations.push(format!(
                "Class {} must be marked inner to be nested!",
                inner.name
            ));
        }

        let kind = NodeKind::Class;
        if let Some(javadoc) = &self.javadoc {
            check_mode(&mut violations, kind, mode, "javadoc", javadoc.mode);
        }
        check_modes(
            &mut violations,
            kind,
            mode,
            "annotations",
            self.annotations.iter().map(|a| a.mode),
        );
        check_modes(
            &mut violations,
            kind,
            mode,
            "inner classes",
            self.inner_classes.iter().map(|c| c.mode),
        );
        check_modes(
            &mut violations,
            kind,
            mode,
            "fields",
            self.fields.iter().map(|f| f.mode),
        );
        check_modes(
            &mut violations,
            kind,
            mode,
            "methods",
            self.methods.iter().map(|m| m.mode),
        );
        check_modes(
            &mut violations,
            kind,
            mode,
            "comments",
            self.single_line_comments
                .iter()
                .map(|c| c.mode)
                .chain(self.multi_line_comments.iter().map(|c| c.mode)),
        );

        let class = Class {
            mode,
            is_inner_class: self.is_inner_class,
            is_interface: self.is_interface,
            package: self.package,
            imports: self.imports,
            static_imports: self.static_imports,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            is_abstract: self.is_abstract,
            is_final: self.is_final,
            name: name.unwrap_or_default(),
            superclass,
            interfaces,
            single_line_comments: self.single_line_comments,
            multi_line_comments: self.multi_line_comments,
            inner_classes: self.inner_classes,
            fields: self.fields,
            methods: self.methods,
            element_order: None,
        };
        if let Some(order) = &self.element_order {
            violations.extend(class.element_order_violations(order));
        }
        BuildError::check(kind, violations)?;
        Ok(Class {
            element_order: self.element_order,
            ..class
        })
    }
}
