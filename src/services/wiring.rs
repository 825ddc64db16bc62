use crate::{
    ComponentName, Config, DynSvc, Inject, InjectError, InjectResult,
    Interface, Service, ServiceInfo, StructTag, TagValues,
};

/// A type that can be registered in a container. The wiring table lists the
/// fields the container fills in when the component is resolved.
///
/// ```
/// use graph_injector::{Component, Inject, Wiring};
///
/// #[derive(Default)]
/// struct UserRepository;
/// impl Component for UserRepository {}
///
/// #[derive(Default)]
/// struct UserController {
///     users: Inject<UserRepository>,
///     audit: Inject<UserRepository>,
/// }
///
/// impl Component for UserController {
///     fn wiring() -> Wiring<Self> {
///         Wiring::new()
///             .bind("users", "user_repository", |c: &Self| &c.users)
///             .tagged(
///                 "audit",
///                 r#"container:"autowire:false;resource:user_repository""#,
///                 |c: &Self| &c.audit,
///             )
///     }
/// }
///
/// assert_eq!(2, UserController::wiring().len());
/// ```
pub trait Component: Service + Sized {
    /// Describes the injectable fields of this component. Components without
    /// dependencies can rely on the default, empty table.
    fn wiring() -> Wiring<Self> {
        Wiring::new()
    }
}

/// How a field declares its binding.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Annotation {
    /// A struct-tag style annotation, read with the container's keywords.
    Tag(&'static str),

    /// A direct binding to a component name.
    Bound {
        /// The component the field is bound to.
        resource: ComponentName,

        /// An explicit auto-wire flag, overriding the container default.
        auto_wire: Option<bool>,
    },
}

/// The binding of one field, resolved against a container's configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldWiring {
    /// Whether the field carries the container annotation at all.
    pub annotated: bool,

    /// The component name the field is bound to.
    pub resource: Option<ComponentName>,

    /// The auto-wire flag written on the field, if any.
    pub explicit_auto_wire: Option<bool>,

    /// Whether the field is injected.
    pub auto_wire: bool,
}

impl FieldWiring {
    /// Resolves an annotation using the given configuration.
    ///
    /// ```
    /// use graph_injector::{Annotation, Config, FieldWiring};
    ///
    /// let config = Config::default();
    /// let wiring = FieldWiring::resolve(
    ///     &Annotation::Tag(r#"container:"autowire:false;resource:user""#),
    ///     &config,
    /// );
    ///
    /// assert!(wiring.annotated);
    /// assert!(!wiring.auto_wire);
    /// assert_eq!(Some("user"), wiring.resource.as_ref().map(|r| r.as_str()));
    /// ```
    #[must_use]
    pub fn resolve(annotation: &Annotation, config: &Config) -> Self {
        match annotation {
            Annotation::Tag(tag) => {
                let value = match StructTag::new(tag)
                    .lookup(config.tag_keyword.as_str())
                {
                    Some(value) => value,
                    None => return FieldWiring::unannotated(config),
                };

                let values = TagValues::parse(&value);
                let explicit_auto_wire =
                    values.get_bool(config.auto_wire_keyword.as_str());
                FieldWiring {
                    annotated: true,
                    resource: values
                        .get(config.resource_keyword.as_str())
                        .map(ComponentName::from),
                    explicit_auto_wire,
                    auto_wire: explicit_auto_wire.unwrap_or(config.auto_wire),
                }
            }
            Annotation::Bound {
                resource,
                auto_wire,
            } => FieldWiring {
                annotated: true,
                resource: Some(resource.clone()),
                explicit_auto_wire: *auto_wire,
                auto_wire: auto_wire.unwrap_or(config.auto_wire),
            },
        }
    }

    fn unannotated(config: &Config) -> Self {
        FieldWiring {
            annotated: false,
            resource: None,
            explicit_auto_wire: None,
            auto_wire: config.auto_wire,
        }
    }

    /// Returns whether the container fills this field.
    #[must_use]
    pub fn is_injected(&self) -> bool {
        self.annotated && self.auto_wire
    }
}

/// The table of injectable fields of a component type.
pub struct Wiring<T: Service> {
    fields: Vec<FieldBinding<T>>,
}

impl<T: Service> Wiring<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Wiring { fields: Vec::new() }
    }

    /// Binds a field directly to a component name. The field is auto-wired
    /// according to the container's default.
    #[must_use]
    pub fn bind<I>(
        self,
        field: &'static str,
        resource: impl Into<ComponentName>,
        slot: fn(&T) -> &Inject<I>,
    ) -> Self
    where
        I: ?Sized + Interface + Send + Sync,
    {
        let annotation = Annotation::Bound {
            resource: resource.into(),
            auto_wire: None,
        };
        self.field(field, annotation, true, slot)
    }

    /// Binds a field through a struct-tag annotation, such as
    /// `container:"autowire:true;resource:user"`.
    #[must_use]
    pub fn tagged<I>(
        self,
        field: &'static str,
        tag: &'static str,
        slot: fn(&T) -> &Inject<I>,
    ) -> Self
    where
        I: ?Sized + Interface + Send + Sync,
    {
        self.field(field, Annotation::Tag(tag), true, slot)
    }

    /// Declares an annotated field the container is not allowed to write.
    /// Auto-wiring such a field is a wiring defect reported by the
    /// self-check.
    #[must_use]
    pub fn private<I>(
        self,
        field: &'static str,
        tag: &'static str,
        slot: fn(&T) -> &Inject<I>,
    ) -> Self
    where
        I: ?Sized + Interface + Send + Sync,
    {
        self.field(field, Annotation::Tag(tag), false, slot)
    }

    /// Adds a field with any annotation and writability.
    #[must_use]
    pub fn field<I>(
        mut self,
        field: &'static str,
        annotation: Annotation,
        writable: bool,
        slot: fn(&T) -> &Inject<I>,
    ) -> Self
    where
        I: ?Sized + Interface + Send + Sync,
    {
        self.fields.push(FieldBinding {
            name: field,
            annotation,
            writable,
            slot: Box::new(SlotFn { get: slot }),
        });
        self
    }

    /// Gets the number of fields in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether this table has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves every annotation against a configuration and erases the
    /// component type.
    pub(crate) fn resolve(self, config: &Config) -> Box<dyn ErasedWiring> {
        let fields = self
            .fields
            .into_iter()
            .enumerate()
            .map(|(index, binding)| {
                let plan = FieldPlan {
                    index,
                    name: binding.name,
                    path: format!(
                        "{}.{}.({})",
                        std::any::type_name::<T>(),
                        binding.name,
                        binding.slot.slot_name()
                    ),
                    wiring: FieldWiring::resolve(&binding.annotation, config),
                    writable: binding.writable,
                    target: binding.slot.target(),
                    contract: binding.slot.is_contract(),
                };
                (plan, binding.slot)
            })
            .collect();

        Box::new(ResolvedWiring { fields })
    }
}

impl<T: Service> Default for Wiring<T> {
    fn default() -> Self {
        Wiring::new()
    }
}

struct FieldBinding<T> {
    name: &'static str,
    annotation: Annotation,
    writable: bool,
    slot: Box<dyn Slot<T>>,
}

/// Typed access to one [`Inject`] field of `T`.
trait Slot<T>: Send + Sync {
    fn target(&self) -> ServiceInfo;
    fn slot_name(&self) -> &'static str;
    fn is_contract(&self) -> bool;
    fn accepts(&self, implementation: ServiceInfo) -> bool;
    fn is_vacant(&self, owner: &T) -> bool;
    fn assign(&self, owner: &T, service: DynSvc) -> Result<(), DynSvc>;
    fn clear(&self, owner: &T);
}

struct SlotFn<T, I: ?Sized + Interface> {
    get: fn(&T) -> &Inject<I>,
}

impl<T, I> Slot<T> for SlotFn<T, I>
where
    T: Service,
    I: ?Sized + Interface + Send + Sync,
{
    fn target(&self) -> ServiceInfo {
        ServiceInfo::of::<I>()
    }

    fn slot_name(&self) -> &'static str {
        std::any::type_name::<Inject<I>>()
    }

    fn is_contract(&self) -> bool {
        I::IS_CONTRACT
    }

    fn accepts(&self, implementation: ServiceInfo) -> bool {
        I::implemented_by(implementation)
    }

    fn is_vacant(&self, owner: &T) -> bool {
        (self.get)(owner).is_empty()
    }

    fn assign(&self, owner: &T, service: DynSvc) -> Result<(), DynSvc> {
        let service = I::downcast(service)?;
        (self.get)(owner).set(service);
        Ok(())
    }

    fn clear(&self, owner: &T) {
        drop((self.get)(owner).clear());
    }
}

/// A field of a registered component, with its annotation resolved.
#[derive(Clone, Debug)]
pub(crate) struct FieldPlan {
    pub index: usize,
    pub name: &'static str,
    pub path: String,
    pub wiring: FieldWiring,
    pub writable: bool,
    pub target: ServiceInfo,
    pub contract: bool,
}

/// A wiring table with its component type erased.
pub(crate) trait ErasedWiring: Send + Sync {
    fn component(&self) -> ServiceInfo;
    fn plans(&self) -> Box<dyn Iterator<Item = &FieldPlan> + '_>;
    fn accepts(&self, index: usize, implementation: ServiceInfo) -> bool;
    fn is_vacant(&self, instance: &DynSvc, index: usize) -> InjectResult<bool>;
    fn assign(
        &self,
        instance: &DynSvc,
        index: usize,
        service: DynSvc,
    ) -> Result<(), DynSvc>;
    fn clear(&self, instance: &DynSvc, index: usize) -> InjectResult<()>;
}

struct ResolvedWiring<T> {
    fields: Vec<(FieldPlan, Box<dyn Slot<T>>)>,
}

impl<T: Service> ResolvedWiring<T> {
    fn owner<'a>(&self, instance: &'a DynSvc) -> InjectResult<&'a T> {
        (**instance)
            .downcast_ref::<T>()
            .ok_or(InjectError::InvalidInstance {
                expected: ServiceInfo::of::<T>(),
            })
    }

    fn slot(&self, index: usize) -> &dyn Slot<T> {
        self.fields[index].1.as_ref()
    }
}

impl<T: Service> ErasedWiring for ResolvedWiring<T> {
    fn component(&self) -> ServiceInfo {
        ServiceInfo::of::<T>()
    }

    fn plans(&self) -> Box<dyn Iterator<Item = &FieldPlan> + '_> {
        Box::new(self.fields.iter().map(|(plan, _)| plan))
    }

    fn accepts(&self, index: usize, implementation: ServiceInfo) -> bool {
        self.slot(index).accepts(implementation)
    }

    fn is_vacant(&self, instance: &DynSvc, index: usize) -> InjectResult<bool> {
        Ok(self.slot(index).is_vacant(self.owner(instance)?))
    }

    fn assign(
        &self,
        instance: &DynSvc,
        index: usize,
        service: DynSvc,
    ) -> Result<(), DynSvc> {
        match self.owner(instance) {
            Ok(owner) => self.slot(index).assign(owner, service),
            Err(_) => Err(service),
        }
    }

    fn clear(&self, instance: &DynSvc, index: usize) -> InjectResult<()> {
        self.slot(index).clear(self.owner(instance)?);
        Ok(())
    }
}
