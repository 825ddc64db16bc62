use crate::{
    interface, Component, Config, Container, ContainerBuilder, DynSvc,
    FieldDefect, Inject, InjectError, LifecycleMode, Pool, SelfCheckError,
    Session, Svc, Wiring,
};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Barrier, Mutex,
    },
    thread,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

trait Named: Send + Sync {
    fn name(&self) -> &'static str;
}

#[derive(Default)]
struct User(u32);
impl Component for User {}

impl Named for User {
    fn name(&self) -> &'static str {
        "user"
    }
}

interface!(Named = [User]);

#[derive(Default)]
struct Address;
impl Component for Address {}

#[derive(Default)]
struct Order {
    user: Inject<User>,
    address: Inject<Address>,
}

impl Component for Order {
    fn wiring() -> Wiring<Self> {
        Wiring::new()
            .bind("user", "user", |o: &Self| &o.user)
            .tagged(
                "address",
                r#"container:"autowire:true;resource:address""#,
                |o: &Self| &o.address,
            )
    }
}

#[derive(Default)]
struct Ship {
    user: Inject<User>,
    address: Inject<Address>,
    order: Inject<Order>,
}

impl Component for Ship {
    fn wiring() -> Wiring<Self> {
        Wiring::new()
            .bind("user", "user", |s: &Self| &s.user)
            .bind("address", "address", |s: &Self| &s.address)
            .tagged("order", r#"container:"resource:order""#, |s: &Self| {
                &s.order
            })
    }
}

#[derive(Default)]
struct Left {
    right: Inject<Right>,
}

impl Component for Left {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("right", "right", |l: &Self| &l.right)
    }
}

#[derive(Default)]
struct Right {
    left: Inject<Left>,
}

impl Component for Right {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("left", "left", |r: &Self| &r.left)
    }
}

fn pooled_builder() -> ContainerBuilder {
    ContainerBuilder::new(Config::default().with_mode(LifecycleMode::Pooled))
}

fn pooled_shop() -> Container {
    let mut builder = pooled_builder();
    builder
        .register_multi_instance("user", Pool::<User>::default())
        .unwrap();
    builder
        .register_multi_instance("address", Pool::<Address>::default())
        .unwrap();
    builder
        .register_multi_instance("order", Pool::<Order>::default())
        .unwrap();
    builder
        .register_multi_instance("ship", Pool::<Ship>::default())
        .unwrap();
    builder.build()
}

fn singleton_shop() -> Container {
    let mut builder = Container::builder();
    builder
        .register_instance("user", Svc::new(User(1)))
        .unwrap();
    builder.register_instance("address", Svc::new(Address)).unwrap();
    builder
        .register_instance("order", Svc::new(Order::default()))
        .unwrap();
    builder
        .register_instance("ship", Svc::new(Ship::default()))
        .unwrap();
    builder.build()
}

#[test]
fn singleton_resolves_identical_instances() {
    init_logging();
    let container = singleton_shop();
    container.self_check().unwrap();

    let mut first = Session::new();
    let mut second = Session::new();
    let order1: Svc<Order> = container.get("order", &mut first).unwrap();
    let order2: Svc<Order> = container.get("order", &mut second).unwrap();
    assert!(Svc::ptr_eq(&order1, &order2));

    let user: Svc<User> = container.get("user", &mut second).unwrap();
    assert!(Svc::ptr_eq(&user, &order1.user.get().unwrap()));
    assert_eq!(1, user.0);
}

#[test]
fn singleton_self_check_can_run_twice() {
    init_logging();
    let container = singleton_shop();

    container.self_check().unwrap();
    container.self_check().unwrap();
}

#[test]
fn singletons_resolve_without_self_check() {
    let container = singleton_shop();

    let mut session = Session::new();
    let ship: Svc<Ship> = container.get("ship", &mut session).unwrap();
    let order = ship.order.get().unwrap();
    assert!(Svc::ptr_eq(&ship.user.get().unwrap(), &order.user.get().unwrap()));

    // Singletons keep their dependencies after the session is released
    container.release_session(&mut session);
    assert!(session.is_empty());
    assert!(!ship.order.is_empty());
}

#[test]
fn pooled_sessions_get_distinct_instances() {
    init_logging();
    let container = pooled_shop();

    let mut first = Session::new();
    let mut second = Session::new();
    let order1: Svc<Order> = container.get("order", &mut first).unwrap();
    let order2: Svc<Order> = container.get("order", &mut second).unwrap();
    assert!(!Svc::ptr_eq(&order1, &order2));

    let again: Svc<Order> = container.get("order", &mut first).unwrap();
    assert!(Svc::ptr_eq(&order1, &again));

    let user: Svc<User> = container.get("user", &mut first).unwrap();
    assert!(Svc::ptr_eq(&user, &order1.user.get().unwrap()));

    container.release_session(&mut first);
    container.release_session(&mut second);
}

#[test]
fn pooled_cycle_terminates() {
    let mut builder = pooled_builder();
    builder
        .register_multi_instance("left", Pool::<Left>::default())
        .unwrap();
    builder
        .register_multi_instance("right", Pool::<Right>::default())
        .unwrap();
    let container = builder.build();
    container.self_check().unwrap();

    let mut session = Session::new();
    let left: Svc<Left> = container.get("left", &mut session).unwrap();
    let right = left.right.get().unwrap();
    assert!(Svc::ptr_eq(&left, &right.left.get().unwrap()));
    assert_eq!(2, session.len());

    container.release_session(&mut session);
    assert!(left.right.is_empty());
    assert!(right.left.is_empty());
}

#[test]
fn singleton_cycle_terminates() {
    let mut builder = Container::builder();
    builder
        .register_instance("left", Svc::new(Left::default()))
        .unwrap();
    builder
        .register_instance("right", Svc::new(Right::default()))
        .unwrap();
    let container = builder.build();
    container.self_check().unwrap();

    let mut session = Session::new();
    let right: Svc<Right> = container.get("right", &mut session).unwrap();
    let left = right.left.get().unwrap();
    assert!(Svc::ptr_eq(&right, &left.right.get().unwrap()));
}

#[derive(Default)]
struct Head {
    tail: Inject<Tail>,
    missing: Inject<User>,
}

impl Component for Head {
    fn wiring() -> Wiring<Self> {
        Wiring::new()
            .bind("tail", "tail", |h: &Self| &h.tail)
            .bind("missing", "ghost", |h: &Self| &h.missing)
    }
}

#[derive(Default)]
struct Tail {
    head: Inject<Head>,
}

impl Component for Tail {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("head", "head", |t: &Self| &t.head)
    }
}

#[test]
fn failed_singleton_resolution_initializes_nothing() {
    init_logging();
    let mut builder = Container::builder();
    builder
        .register_instance("head", Svc::new(Head::default()))
        .unwrap();
    builder
        .register_instance("tail", Svc::new(Tail::default()))
        .unwrap();
    let container = builder.build();

    let mut session = Session::new();
    assert!(matches!(
        container.try_get_instance("head", &mut session),
        Err(InjectError::NotRegistered { name }) if name.as_str() == "ghost"
    ));

    // The tail was wired along the way, but its head never completed
    let mut session = Session::new();
    assert!(matches!(
        container.get::<Tail>("tail", &mut session),
        Err(InjectError::NotRegistered { name }) if name.as_str() == "ghost"
    ));
}

#[test]
fn concurrent_first_singleton_resolutions_share_one_graph() {
    init_logging();
    let container = singleton_shop();
    let barrier = Barrier::new(8);
    let ships = Mutex::new(Vec::new());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                barrier.wait();
                let mut session = Session::new();
                let ship: Svc<Ship> =
                    container.get("ship", &mut session).unwrap();
                ships.lock().unwrap().push(ship);
            });
        }
    });

    let ships = ships.into_inner().unwrap();
    assert_eq!(8, ships.len());
    for ship in &ships {
        assert!(Svc::ptr_eq(&ships[0], ship));

        let order = ship.order.get().unwrap();
        assert!(!order.user.is_empty());
        assert!(!order.address.is_empty());
        assert!(Svc::ptr_eq(
            &ship.user.get().unwrap(),
            &order.user.get().unwrap()
        ));
        assert!(!ship.address.is_empty());
    }
}

#[test]
fn diamond_graph_is_wired_consistently() {
    init_logging();
    let container = pooled_shop();
    container.self_check().unwrap();

    let mut session = Session::new();
    let ship: Svc<Ship> = container.get("ship", &mut session).unwrap();
    let order = ship.order.get().unwrap();
    assert!(Svc::ptr_eq(&ship.user.get().unwrap(), &order.user.get().unwrap()));
    assert!(Svc::ptr_eq(
        &ship.address.get().unwrap(),
        &order.address.get().unwrap()
    ));
    assert_eq!(4, session.len());

    container.release_session(&mut session);
    assert!(session.is_empty());
    assert!(ship.user.is_empty());
    assert!(ship.address.is_empty());
    assert!(ship.order.is_empty());
    assert!(order.user.is_empty());
    assert!(order.address.is_empty());
}

#[test]
fn released_instances_are_reused() {
    let container = pooled_shop();

    let mut first = Session::new();
    let order1: Svc<Order> = container.get("order", &mut first).unwrap();
    container.release_session(&mut first);

    let mut second = Session::new();
    let order2: Svc<Order> = container.get("order", &mut second).unwrap();
    assert!(Svc::ptr_eq(&order1, &order2));
    assert!(!order2.user.is_empty());
    container.release_session(&mut second);
}

#[test]
fn scope_releases_on_drop() {
    let container = pooled_shop();

    let order = {
        let mut scope = container.scope();
        let order = scope.get::<Order>("order").unwrap();
        assert!(!order.user.is_empty());
        assert_eq!(3, scope.session().len());
        order
    };

    assert!(order.user.is_empty());
    assert!(order.address.is_empty());
}

#[test]
fn seeded_instances_take_priority() {
    let container = pooled_shop();
    let seeded = Svc::new(User(42));

    let mut scope = container.scope();
    scope.session_mut().insert("user", seeded.clone());
    let order = scope.get::<Order>("order").unwrap();

    assert!(Svc::ptr_eq(&seeded, &order.user.get().unwrap()));
}

#[test]
fn seeding_a_scope_releases_the_replaced_instance() {
    let container = pooled_shop();
    let seeded = Svc::new(User(42));

    let mut scope = container.scope();
    let borrowed = scope.get::<User>("user").unwrap();
    scope.seed("user", seeded.clone());

    // The borrowed instance went back to its pool
    assert_eq!(2, Svc::strong_count(&borrowed));
    let order = scope.get::<Order>("order").unwrap();
    assert!(Svc::ptr_eq(&seeded, &order.user.get().unwrap()));
}

#[test]
fn wrong_type_release_is_dropped() {
    init_logging();
    let container = pooled_shop();

    let stranger = Svc::new(Address);
    container.release("user", stranger.clone());
    assert_eq!(1, Svc::strong_count(&stranger));

    let unknown = Svc::new(User(3));
    container.release("ghost", unknown.clone());
    assert_eq!(1, Svc::strong_count(&unknown));

    let user = Svc::new(User(4));
    container.release("user", user.clone());
    assert_eq!(2, Svc::strong_count(&user));
}

#[test]
fn concurrent_pooled_resolutions_never_share_instances() {
    let created = Arc::new(AtomicUsize::new(0));
    let mut builder = pooled_builder();
    builder
        .register_multi_instance("user", Pool::<User>::default())
        .unwrap();
    builder
        .register_multi_instance("address", Pool::<Address>::default())
        .unwrap();
    builder
        .register_multi_instance("order", {
            let created = created.clone();
            Pool::new(move || {
                created.fetch_add(1, Ordering::SeqCst);
                Order::default()
            })
        })
        .unwrap();
    let container = builder.build();
    let held = Mutex::new(Vec::new());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    let mut scope = container.scope();
                    let order = scope.get::<Order>("order").unwrap();
                    assert!(!order.user.is_empty());
                }

                let mut session = Session::new();
                let order: Svc<Order> =
                    container.get("order", &mut session).unwrap();
                held.lock().unwrap().push((order, session));
            });
        }
    });

    let mut held = held.into_inner().unwrap();
    for (i, (order, _)) in held.iter().enumerate() {
        for (other, _) in &held[i + 1..] {
            assert!(!Svc::ptr_eq(order, other));
        }
    }
    assert!(created.load(Ordering::SeqCst) >= 8);

    for (_, session) in &mut held {
        container.release_session(session);
    }
}

#[test]
fn interface_slots_are_injected() {
    #[derive(Default)]
    struct Badge {
        owner: Inject<dyn Named>,
    }

    impl Component for Badge {
        fn wiring() -> Wiring<Self> {
            Wiring::new().tagged(
                "owner",
                r#"container:"autowire;resource:user""#,
                |b: &Self| &b.owner,
            )
        }
    }

    let mut builder = Container::builder();
    builder.register_instance("user", Svc::new(User(5))).unwrap();
    builder
        .register_instance("badge", Svc::new(Badge::default()))
        .unwrap();
    let container = builder.build();
    container.self_check().unwrap();

    let mut session = Session::new();
    let badge: Svc<Badge> = container.get("badge", &mut session).unwrap();
    assert_eq!("user", badge.owner.get().unwrap().name());

    let named: Svc<dyn Named> = container.get("user", &mut session).unwrap();
    assert_eq!("user", named.name());
}

#[test]
fn disabled_auto_wire_leaves_fields_empty() {
    #[derive(Default)]
    struct Invoice {
        user: Inject<User>,
        address: Inject<Address>,
    }

    impl Component for Invoice {
        fn wiring() -> Wiring<Self> {
            Wiring::new()
                .bind("user", "user", |i: &Self| &i.user)
                .tagged(
                    "address",
                    r#"container:"autowire:true;resource:address""#,
                    |i: &Self| &i.address,
                )
        }
    }

    let mut builder = ContainerBuilder::new(
        Config::default()
            .with_mode(LifecycleMode::Pooled)
            .with_auto_wire(false),
    );
    builder
        .register_multi_instance("address", Pool::<Address>::default())
        .unwrap();
    builder
        .register_multi_instance("invoice", Pool::<Invoice>::default())
        .unwrap();
    let container = builder.build();
    container.self_check().unwrap();

    let mut scope = container.scope();
    let invoice = scope.get::<Invoice>("invoice").unwrap();
    assert!(invoice.user.is_empty());
    assert!(!invoice.address.is_empty());
}

#[test]
fn free_clears_only_injected_fields() {
    #[derive(Default)]
    struct Profile {
        user: Inject<User>,
        address: Inject<Address>,
        backup: Inject<User>,
    }

    impl Component for Profile {
        fn wiring() -> Wiring<Self> {
            Wiring::new()
                .bind("user", "user", |p: &Self| &p.user)
                .tagged(
                    "address",
                    r#"container:"autowire:false;resource:address""#,
                    |p: &Self| &p.address,
                )
                .tagged("backup", r#"json:"backup""#, |p: &Self| &p.backup)
        }
    }

    let profile = Svc::new(Profile {
        user: Inject::with(Svc::new(User(1))),
        address: Inject::with(Svc::new(Address)),
        backup: Inject::with(Svc::new(User(2))),
    });

    let mut builder = Container::builder();
    builder.register_instance("profile", profile.clone()).unwrap();
    let container = builder.build();

    let instance: DynSvc = profile.clone();
    assert_eq!(1, container.free(&instance));
    assert!(profile.user.is_empty());
    assert!(!profile.address.is_empty());
    assert!(!profile.backup.is_empty());

    let unregistered: DynSvc = Svc::new(Address);
    assert_eq!(0, container.free(&unregistered));
}

#[test]
fn freed_instances_look_fresh() {
    let container = pooled_shop();

    let mut session = Session::new();
    let order: Svc<Order> = container.get("order", &mut session).unwrap();
    let instance: DynSvc = order.clone();
    assert_eq!(2, container.free(&instance));

    let fresh = Order::default();
    assert_eq!(fresh.user.is_empty(), order.user.is_empty());
    assert_eq!(fresh.address.is_empty(), order.address.is_empty());
}

#[derive(Default)]
struct Untagged {
    user: Inject<User>,
}

impl Component for Untagged {
    fn wiring() -> Wiring<Self> {
        Wiring::new().tagged("user", r#"container:"autowire:true""#, |u: &Self| {
            &u.user
        })
    }
}

#[derive(Default)]
struct Hidden {
    user: Inject<User>,
}

impl Component for Hidden {
    fn wiring() -> Wiring<Self> {
        Wiring::new().private("user", r#"container:"resource:user""#, |h: &Self| {
            &h.user
        })
    }
}

#[derive(Default)]
struct Prefilled {
    user: Inject<User>,
}

impl Component for Prefilled {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("user", "user", |p: &Self| &p.user)
    }
}

#[derive(Default)]
struct Orphan {
    user: Inject<User>,
}

impl Component for Orphan {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("user", "ghost", |o: &Self| &o.user)
    }
}

#[derive(Default)]
struct Mismatched {
    address: Inject<Address>,
    user: Inject<User>,
}

impl Component for Mismatched {
    fn wiring() -> Wiring<Self> {
        Wiring::new()
            .bind("address", "address", |m: &Self| &m.address)
            .bind("user", "address", |m: &Self| &m.user)
    }
}

#[derive(Default)]
struct Unimplemented {
    owner: Inject<dyn Named>,
}

impl Component for Unimplemented {
    fn wiring() -> Wiring<Self> {
        Wiring::new().bind("owner", "address", |u: &Self| &u.owner)
    }
}

#[derive(Default)]
struct Relaxed {
    user: Inject<User>,
}

impl Component for Relaxed {
    fn wiring() -> Wiring<Self> {
        Wiring::new().tagged(
            "user",
            r#"container:"autowire:false;resource:ghost""#,
            |r: &Self| &r.user,
        )
    }
}

fn check_target<T: Component>(target: T) -> Result<(), SelfCheckError> {
    init_logging();
    let mut builder = Container::builder();
    builder.register_instance("user", Svc::new(User(1))).unwrap();
    builder.register_instance("address", Svc::new(Address)).unwrap();
    builder.register_instance("target", Svc::new(target)).unwrap();
    builder.build().self_check_component("target")
}

#[test]
fn self_check_reports_missing_resource_tag() {
    match check_target(Untagged::default()) {
        Err(SelfCheckError::Field {
            component,
            index: 0,
            field,
            reason: FieldDefect::ResourceTagMissing,
        }) => {
            assert_eq!("target", component.as_str());
            assert!(field.contains("Untagged.user.("));
        }
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn self_check_reports_private_fields() {
    assert!(matches!(
        check_target(Hidden::default()),
        Err(SelfCheckError::Field {
            reason: FieldDefect::PrivateParam,
            ..
        })
    ));
}

#[test]
fn self_check_reports_populated_fields() {
    let target = Prefilled {
        user: Inject::with(Svc::new(User(9))),
    };

    assert!(matches!(
        check_target(target),
        Err(SelfCheckError::Field {
            reason: FieldDefect::NotNull,
            ..
        })
    ));
}

#[test]
fn self_check_reports_unregistered_resources() {
    match check_target(Orphan::default()) {
        Err(SelfCheckError::Field {
            reason: FieldDefect::NotRegistered { resource },
            ..
        }) => assert_eq!("ghost", resource.as_str()),
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn self_check_reports_type_mismatches() {
    match check_target(Mismatched::default()) {
        Err(SelfCheckError::Field {
            index: 1,
            reason:
                FieldDefect::TypeMismatch {
                    resource,
                    expected,
                    actual,
                },
            ..
        }) => {
            assert_eq!("address", resource.as_str());
            assert_eq!(std::any::type_name::<User>(), expected);
            assert_eq!(std::any::type_name::<Address>(), actual);
        }
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn self_check_reports_unimplemented_interfaces() {
    match check_target(Unimplemented::default()) {
        Err(SelfCheckError::Field {
            reason:
                FieldDefect::NotImplemented {
                    actual, interface, ..
                },
            ..
        }) => {
            assert_eq!(std::any::type_name::<Address>(), actual);
            assert_eq!(std::any::type_name::<dyn Named>(), interface);
        }
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn self_check_skips_fields_without_auto_wire() {
    let target = Relaxed {
        user: Inject::with(Svc::new(User(8))),
    };

    check_target(target).unwrap();
}

#[test]
fn self_check_reports_unknown_components() {
    let container = singleton_shop();

    assert!(matches!(
        container.self_check_component("ghost"),
        Err(SelfCheckError::NotRegistered { name }) if name.as_str() == "ghost"
    ));
}

#[test]
fn self_check_stops_at_broken_component() {
    let mut builder = pooled_builder();
    builder
        .register_multi_instance("order", Pool::<Order>::default())
        .unwrap();
    let container = builder.build();

    match container.self_check() {
        Err(SelfCheckError::Field {
            component, reason, ..
        }) => {
            assert_eq!("order", component.as_str());
            assert_eq!(
                FieldDefect::NotRegistered {
                    resource: "user".into()
                },
                reason
            );
        }
        result => panic!("unexpected result: {:?}", result),
    }
}

#[test]
fn missing_dependencies_are_errors() {
    let mut builder = pooled_builder();
    builder
        .register_multi_instance("order", Pool::<Order>::default())
        .unwrap();
    let container = builder.build();

    let mut session = Session::new();
    assert!(matches!(
        container.try_get_instance("order", &mut session),
        Err(InjectError::NotRegistered { name }) if name.as_str() == "user"
    ));
    container.release_session(&mut session);
}

#[test]
#[should_panic(expected = "component not exist in container => ghost")]
fn get_instance_panics_on_unknown_names() {
    let container = pooled_shop();
    let mut session = Session::new();

    let _ = container.get_instance("ghost", &mut session);
}

#[test]
fn typed_get_checks_the_type() {
    let container = singleton_shop();
    let mut session = Session::new();

    assert!(matches!(
        container.get::<Address>("user", &mut session),
        Err(InjectError::InvalidImplementation { name, .. })
            if name.as_str() == "user"
    ));
}

#[test]
fn registration_is_checked_against_the_lifecycle() {
    let mut singleton = Container::builder();
    assert!(matches!(
        singleton.register_multi_instance("user", Pool::<User>::default()),
        Err(InjectError::WrongLifecycle {
            requested: LifecycleMode::Pooled,
            mode: LifecycleMode::Singleton,
        })
    ));

    let mut pooled = pooled_builder();
    assert!(matches!(
        pooled.register_instance("user", Svc::new(User(1))),
        Err(InjectError::WrongLifecycle {
            requested: LifecycleMode::Singleton,
            mode: LifecycleMode::Pooled,
        })
    ));
    assert!(!pooled.contains("user"));
}

#[test]
fn registration_rejects_bad_names() {
    let probes = Arc::new(AtomicUsize::new(0));
    let counting_pool = || {
        let probes = probes.clone();
        Pool::new(move || {
            probes.fetch_add(1, Ordering::SeqCst);
            User::default()
        })
    };

    let mut builder = pooled_builder();
    assert!(matches!(
        builder.register_multi_instance("", counting_pool()),
        Err(InjectError::InvalidName)
    ));
    builder
        .register_multi_instance("user", counting_pool())
        .unwrap();
    assert!(matches!(
        builder.register_multi_instance("user", counting_pool()),
        Err(InjectError::DuplicateName { name }) if name.as_str() == "user"
    ));

    // Only the accepted pool was probed
    assert_eq!(1, probes.load(Ordering::SeqCst));
    assert!(builder.contains("user"));
    assert_eq!(LifecycleMode::Pooled, builder.mode());

    let container = builder.build();
    assert!(container.contains("user"));
    assert!(!container.contains("order"));
    assert_eq!(LifecycleMode::Pooled, container.mode());
}

#[test]
fn empty_keywords_use_defaults() {
    let config = Config::default()
        .with_tag_keyword("")
        .with_mode(LifecycleMode::Pooled);
    let builder = ContainerBuilder::new(config);

    assert_eq!("container", builder.config().tag_keyword.as_str());
    assert_eq!("container", builder.build().config().tag_keyword.as_str());
}
