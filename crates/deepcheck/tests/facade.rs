#![cfg(all(feature = "derive", feature = "contrib"))]

//! The `validate` entry point: self when capable, otherwise descendants.

use deepcheck::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, Default, Walkable)]
#[walk(validatable)]
struct NonZeroInt(pub i32);

impl Validatable for NonZeroInt {
    fn validate(&self) -> Result<(), ValidationError> {
        ne(0).validate(&self.0)
    }
}

#[derive(Debug, Clone, Default, Walkable)]
#[walk(validatable)]
struct Model {
    pub public: NonZeroInt,
    private: NonZeroInt,
}

impl Model {
    fn new(public: i32, private: i32) -> Self {
        Self {
            public: NonZeroInt(public),
            private: NonZeroInt(private),
        }
    }
}

impl Validatable for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        walk(self)
    }
}

#[derive(Walkable)]
struct Embedded {
    pub model: Model,
}

#[derive(Walkable)]
struct EmbeddedBox {
    pub model: Box<Model>,
}

#[derive(Walkable)]
struct HiddenErased {
    inner: Box<dyn Walkable>,
}

#[derive(Walkable)]
struct PublicErased {
    pub field: Box<dyn Walkable>,
}

#[test]
fn validate_model_in_every_holder() {
    let valid = Model::new(1, 0);
    assert!(validate(&valid).is_ok());
    assert!(validate(&&valid).is_ok());
    assert!(validate(&Box::new(valid.clone())).is_ok());
    let erased: Box<dyn Walkable> = Box::new(valid);
    assert!(validate(&erased).is_ok());

    let invalid = Model::new(0, 1);
    assert!(validate(&invalid).is_err());
    assert!(validate(&&invalid).is_err());
    assert!(validate(&Box::new(invalid.clone())).is_err());
    let erased: Box<dyn Walkable> = Box::new(invalid);
    assert!(validate(&erased).is_err());
}

#[test]
fn validate_reaches_nested_models() {
    assert!(validate(&Embedded { model: Model::new(1, 0) }).is_ok());
    assert!(validate(&EmbeddedBox { model: Box::new(Model::new(1, 0)) }).is_ok());

    assert!(validate(&Embedded { model: Model::new(0, 1) }).is_err());
    assert!(validate(&EmbeddedBox { model: Box::new(Model::new(0, 1)) }).is_err());
}

#[test]
fn erased_members_follow_visibility() {
    let hidden = HiddenErased {
        inner: Box::new(Model::new(0, 1)),
    };
    assert!(validate(&hidden).is_ok());
    assert!(hidden.inner.validatable().is_some());

    let public = PublicErased {
        field: Box::new(Model::new(0, 1)),
    };
    assert!(validate(&public).is_err());
}

#[test]
fn validate_checks_the_root_itself() {
    let zero = NonZeroInt(0);
    assert!(Validatable::validate(&zero).is_err());
    assert!(validate(&zero).is_err());
    assert!(validate(&&zero).is_err());
    assert!(validate(&Some(zero)).is_err());

    let one = NonZeroInt(1);
    assert!(Validatable::validate(&one).is_ok());
    assert!(validate(&one).is_ok());
    assert!(validate(&&one).is_ok());
}

#[test]
fn validate_without_capability_walks() {
    assert!(validate(&vec![NonZeroInt(1), NonZeroInt(2)]).is_ok());

    let err = validate(&vec![NonZeroInt(1), NonZeroInt(0)]).unwrap_err();
    assert_eq!(err, ne(0).validate(&0).unwrap_err());

    assert!(validate(&None::<Box<dyn Walkable>>).is_ok());
    assert!(validate(&42_u8).is_ok());
}

// ============================================================================
// A TYPICAL PROFILE
// ============================================================================

#[derive(Walkable)]
#[walk(validatable)]
struct Sex(pub String);

impl Validatable for Sex {
    fn validate(&self) -> Result<(), ValidationError> {
        one_of(["male", "female", "other"]).validate(&self.0.as_str())
    }
}

#[derive(Walkable)]
#[walk(validatable)]
struct EmailAddress(pub String);

impl Validatable for EmailAddress {
    fn validate(&self) -> Result<(), ValidationError> {
        email().validate(&self.0)
    }
}

#[derive(Walkable)]
#[walk(validatable)]
struct Info {
    pub email: EmailAddress,
    pub sex: Sex,
    age: u32,
}

impl Validatable for Info {
    fn validate(&self) -> Result<(), ValidationError> {
        check_true(self.age >= 18)?;
        walk(self)
    }
}

fn info(email: &str, sex: &str, age: u32) -> Info {
    Info {
        email: EmailAddress(email.to_owned()),
        sex: Sex(sex.to_owned()),
        age,
    }
}

#[test]
fn profile_validation() {
    assert!(validate(&info("valid@gmail.com", "other", 30)).is_ok());

    assert_eq!(validate(&info("valid@gmail.com", "other", 17)).unwrap_err().code, "is_true");
    assert_eq!(validate(&info("invalid|gmail.com", "male", 30)).unwrap_err().code, "email");
    assert_eq!(validate(&info("valid@gmail.com", "unknown", 30)).unwrap_err().code, "one_of");
}

#[derive(Walkable)]
#[walk(validatable)]
struct Wrapper<T> {
    pub value: T,
}

impl<T: Walkable> Validatable for Wrapper<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        walk(self)
    }
}

#[test]
fn generic_wrapper_walks_its_value() {
    let good = EmailAddress("valid@gmail.com".into());
    assert!(validate(&Wrapper { value: good }).is_ok());

    let bad = EmailAddress("invalid|gmail.com".into());
    assert!(validate(&Wrapper { value: bad }).is_err());

    assert!(validate(&Wrapper { value: 0_i32 }).is_ok());
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[derive(Walkable)]
#[walk(validatable)]
struct Account {
    pub handle: String,
    pub backups: Vec<NonZeroInt>,
}

impl Validatable for Account {
    fn validate(&self) -> Result<(), ValidationError> {
        join([
            deepcheck::all![len::<str, _>(gte(3)), not(contains(" "))].validate(&self.handle),
            walk(self),
        ])
    }
}

#[test]
fn aggregation_keeps_every_independent_failure() {
    let account = Account {
        handle: "a b".into(),
        backups: vec![NonZeroInt(0)],
    };
    let err = validate(&account).unwrap_err();

    assert_eq!(err.code, "joined");
    let codes: Vec<&str> = err.nested.iter().map(|e| &*e.code).collect();
    assert_eq!(codes, ["not", "ne"]);
    assert_eq!(err.total_error_count(), 3);

    let account = Account {
        handle: "abc".into(),
        backups: vec![NonZeroInt(0), NonZeroInt(0)],
    };
    // A single walk is still fail-fast, so only one failure surfaces.
    assert_eq!(validate(&account).unwrap_err().code, "ne");
}
