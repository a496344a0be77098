use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use dummy_objects::typed::{begin_registration, composite_from_value, random_variant, Setter};
use dummy_objects::{
    dummy_enum, dummy_object, Dummy, DummyField, DummyValue, FieldSetter, PopulateError,
    Populator, TypeRef, TypeRegistry, UnhandledReason, COLLECTION_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

dummy_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum PhoneKind {
        #[default]
        Mobile,
        Home,
        Work,
    }
}

dummy_object! {
    #[derive(Debug, Clone, Default)]
    pub struct Phone {
        pub number: String,
        pub kind: PhoneKind,
        pub extension: Option<i16>,
    }
}

dummy_object! {
    #[derive(Debug, Clone, Default)]
    pub struct Person {
        pub name: String,
        pub last_name: Option<String>,
        pub age: Option<i32>,
        pub is_male: Option<bool>,
        pub is_single: bool,
        pub height: i64,
        pub weight: f64,
        pub savings: Option<Decimal>,
        pub birth_date: Option<DateTime<Utc>>,
        pub local_date: Option<NaiveDate>,
        pub local_time: Option<NaiveTime>,
        pub local_date_time: Option<NaiveDateTime>,
        pub phones: Vec<Phone>,
    }
}

dummy_object! {
    #[derive(Debug, Default)]
    pub struct Node {
        pub label: String,
        pub next: Option<Box<Node>>,
        pub children: Vec<Node>,
    }
}

#[derive(Debug)]
pub struct Broken {
    pub value: i32,
}

impl DummyField for Broken {
    fn type_ref() -> TypeRef {
        TypeRef::named(Self::TYPE_NAME)
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), PopulateError> {
        begin_registration::<Self>(registry).map(|_| ())
    }

    fn from_dummy_value(value: DummyValue) -> Result<Self, PopulateError> {
        composite_from_value(value)
    }
}

impl Dummy for Broken {
    const TYPE_NAME: &'static str = "Broken";

    fn construct() -> Result<Self, String> {
        Err("constructor requires arguments".to_string())
    }

    fn fields() -> Vec<FieldSetter<Self>> {
        let set: Setter<Self> = |target, value| {
            target.value = i32::from_dummy_value(value)?;
            Ok(())
        };
        vec![FieldSetter {
            name: "value",
            ty: i32::type_ref(),
            set,
        }]
    }
}

dummy_object! {
    #[derive(Debug, Default)]
    pub struct BrokenHolder {
        pub inner: Option<Broken>,
    }
}

// Struct names that collide with the collection and scalar name tables
dummy_object! {
    #[derive(Debug, Default)]
    pub struct Set {
        pub score: i32,
    }
}

dummy_object! {
    #[derive(Debug, Default)]
    pub struct Match {
        pub first: Set,
        pub second: Option<Set>,
    }
}

dummy_object! {
    #[derive(Debug, Default)]
    pub struct Timestamp {
        pub seconds: i64,
    }
}

dummy_object! {
    #[derive(Debug, Default)]
    pub struct Event {
        pub at: Timestamp,
    }
}

#[test]
fn test_person_fields_populated() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let person: Person = populator.create().unwrap();

    assert_eq!(person.name.chars().count(), 10);
    assert_eq!(person.last_name.as_ref().unwrap().chars().count(), 10);
    assert!((1..10).contains(&person.age.unwrap()));
    assert!(person.is_male.is_some());
    assert!((100..1000).contains(&person.height));
    assert!((1.0..10.0).contains(&person.weight));

    let savings = person.savings.unwrap();
    assert!(savings >= Decimal::from(10) && savings < Decimal::from(100));
    assert_eq!(savings.scale(), 0);

    assert!(person.birth_date.is_some());
    assert!(person.local_date.is_some());
    assert!(person.local_time.is_some());
    assert!(person.local_date_time.is_some());
}

#[test]
fn test_nested_collection() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let person: Person = populator.create().unwrap();

    assert_eq!(person.phones.len(), COLLECTION_SIZE);
    for phone in &person.phones {
        assert_eq!(phone.number.chars().count(), 10);
        assert!([PhoneKind::Mobile, PhoneKind::Home, PhoneKind::Work].contains(&phone.kind));
        assert_eq!(phone.extension, None);
    }
}

#[test]
fn test_unhandled_fields_reported() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let population = populator.create_with_report::<Person>().unwrap();

    let paths: Vec<&str> = population
        .unhandled
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(
        paths,
        vec!["phones[0].extension", "phones[1].extension", "phones[2].extension"]
    );
    assert!(population
        .unhandled
        .iter()
        .all(|f| f.reason == UnhandledReason::NoGenerator && f.type_name == "Short"));
    assert!(!population.is_complete());
}

#[test]
fn test_registration_reaches_nested_types() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    populator.register::<Person>().unwrap();

    let registry = populator.registry();
    assert!(registry.get_type("Person").is_some());
    assert!(registry.get_type("Phone").is_some());
    assert!(registry.is_enum("PhoneKind"));
    assert_eq!(
        registry.get_type("Person").unwrap().get_field("phones").unwrap().field_type,
        TypeRef::list(TypeRef::named("Phone"))
    );
}

#[test]
fn test_self_reference_terminates() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let population = populator.create_with_report::<Node>().unwrap();

    let node = population.instance;
    assert_eq!(node.label.chars().count(), 10);
    assert!(node.next.is_none());
    assert!(node.children.is_empty());

    assert_eq!(population.unhandled.len(), 2);
    assert!(population
        .unhandled
        .iter()
        .all(|f| f.reason == UnhandledReason::RecursionCycle && f.type_name == "Node"));
}

#[test]
fn test_construction_failure() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);

    let result = populator.create::<Broken>();
    assert!(matches!(
        result,
        Err(PopulateError::Construction { type_name, .. }) if type_name == "Broken"
    ));
}

#[test]
fn test_nested_construction_failure_propagates() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);

    let result = populator.create::<BrokenHolder>();
    assert!(matches!(
        result,
        Err(PopulateError::Construction { type_name, .. }) if type_name == "Broken"
    ));
}

#[test]
fn test_create_many_independent() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let people: Vec<Person> = populator.create_many(5).unwrap();

    assert_eq!(people.len(), 5);
    assert_ne!(people[0].name, people[1].name);

    let none: Vec<Person> = populator.create_many(0).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_seeded_creation_is_deterministic() {
    let mut first = Populator::seeded(TypeRegistry::new(), 7);
    let mut second = Populator::seeded(TypeRegistry::new(), 7);

    let a: Person = first.create().unwrap();
    let b: Person = second.create().unwrap();

    assert_eq!(a.name, b.name);
    assert_eq!(a.age, b.age);
    assert_eq!(a.height, b.height);
    assert_eq!(a.savings, b.savings);
    let numbers = |p: &Person| p.phones.iter().map(|ph| ph.number.clone()).collect::<Vec<_>>();
    assert_eq!(numbers(&a), numbers(&b));
}

#[test]
fn test_convenience_create() {
    let phone: Phone = dummy_objects::create().unwrap();
    assert_eq!(phone.number.chars().count(), 10);

    let phones: Vec<Phone> = dummy_objects::create_many(4).unwrap();
    assert_eq!(phones.len(), 4);
}

#[test]
fn test_random_variant() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let kind: PhoneKind = random_variant(&mut rng).unwrap();
        assert!([PhoneKind::Mobile, PhoneKind::Home, PhoneKind::Work].contains(&kind));
    }
}

#[test]
fn test_struct_named_like_collection() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);
    let game: Match = populator.create().unwrap();

    assert!((1..10).contains(&game.first.score));
    assert!((1..10).contains(&game.second.unwrap().score));
}

#[test]
fn test_struct_named_like_scalar_is_rejected() {
    let mut populator = Populator::seeded(TypeRegistry::new(), 42);

    let result = populator.create::<Event>();
    assert!(matches!(
        result,
        Err(PopulateError::TypeResolution { type_name, .. }) if type_name == "Timestamp"
    ));
}

#[test]
fn test_registration_conflict_is_reported() {
    let registry = TypeRegistry::from_yaml(
        r#"
version: 1
types:
  - name: Phone
    fields:
      - name: digits
        type: String
enums:
  - name: PhoneKind
    constants:
      - SATELLITE
"#,
    )
    .unwrap();
    let mut populator = Populator::seeded(registry, 42);

    assert!(matches!(
        populator.register::<Phone>(),
        Err(PopulateError::TypeResolution { type_name, .. }) if type_name == "Phone"
    ));
    assert!(matches!(
        populator.register::<PhoneKind>(),
        Err(PopulateError::TypeResolution { type_name, .. }) if type_name == "PhoneKind"
    ));
    assert!(populator.create::<Phone>().is_err());
}

#[test]
fn test_matching_registration_is_accepted() {
    let registry = TypeRegistry::from_yaml(
        r#"
version: 1
enums:
  - name: PhoneKind
    constants:
      - Mobile
      - Home
      - Work
"#,
    )
    .unwrap();
    let mut populator = Populator::seeded(registry, 42);

    let phone: Phone = populator.create().unwrap();
    assert_eq!(phone.number.chars().count(), 10);
}
