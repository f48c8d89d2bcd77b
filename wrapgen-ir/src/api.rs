//! Declarations of the abstract API: namespaces, classes, enums and their members.

use crate::{NameArena, NameId, Type};

/// A typed method argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: NameId,
    pub ty: Type,
}

impl Argument {
    pub fn new(name: NameId, ty: Type) -> Self {
        Self { name, ty }
    }
}

/// How a method is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Instance,
    Class,
    PropertyGetter,
    PropertySetter,
}

impl MethodKind {
    /// Whether the method is called on an object (everything but class methods).
    pub fn has_receiver(&self) -> bool {
        !matches!(self, MethodKind::Class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: NameId,
    pub return_type: Type,
    pub args: Vec<Argument>,
    pub kind: MethodKind,
    pub is_const: bool,
}

impl Method {
    pub fn new(name: NameId, kind: MethodKind, return_type: Type) -> Self {
        Self {
            name,
            return_type,
            args: Vec::new(),
            kind,
            is_const: false,
        }
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }
}

/// A getter/setter pair sharing a base name.
///
/// Properties are never translated as such: they expand into their
/// accessor methods, getter first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: NameId,
    pub getter: Option<Method>,
    pub setter: Option<Method>,
}

impl Property {
    /// Accessors in emission order: getter, then setter.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.getter.iter().chain(self.setter.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: NameId,
    pub properties: Vec<Property>,
    pub instance_methods: Vec<Method>,
    pub class_methods: Vec<Method>,
}

impl Class {
    pub fn new(name: NameId) -> Self {
        Self {
            name,
            properties: Vec::new(),
            instance_methods: Vec::new(),
            class_methods: Vec::new(),
        }
    }

    /// Every method of the class: property accessors, then class methods,
    /// then instance methods.
    pub fn all_methods(&self) -> impl Iterator<Item = &Method> {
        self.properties
            .iter()
            .flat_map(Property::methods)
            .chain(self.class_methods.iter())
            .chain(self.instance_methods.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: NameId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: NameId,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: NameId,
    pub classes: Vec<Class>,
    pub enums: Vec<Enum>,
    pub namespaces: Vec<Namespace>,
}

impl Namespace {
    pub fn new(name: NameId) -> Self {
        Self {
            name,
            classes: Vec::new(),
            enums: Vec::new(),
            namespaces: Vec::new(),
        }
    }

    fn collect<'a>(&'a self, classes: &mut Vec<&'a Class>, enums: &mut Vec<&'a Enum>) {
        classes.extend(self.classes.iter());
        enums.extend(self.enums.iter());
        for child in &self.namespaces {
            child.collect(classes, enums);
        }
    }
}

/// A fully resolved API model: the name arena plus the namespace tree.
#[derive(Debug, Clone, Default)]
pub struct Api {
    pub names: NameArena,
    pub namespaces: Vec<Namespace>,
}

impl Api {
    pub fn new(names: NameArena, namespaces: Vec<Namespace>) -> Self {
        Self { names, namespaces }
    }

    /// All classes, depth-first in declaration order.
    pub fn classes(&self) -> Vec<&Class> {
        let mut classes = Vec::new();
        let mut enums = Vec::new();
        for ns in &self.namespaces {
            ns.collect(&mut classes, &mut enums);
        }
        classes
    }

    /// All enums, depth-first in declaration order.
    pub fn enums(&self) -> Vec<&Enum> {
        let mut classes = Vec::new();
        let mut enums = Vec::new();
        for ns in &self.namespaces {
            ns.collect(&mut classes, &mut enums);
        }
        enums
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
