use std::rc::Rc;

use veneer::{Decorator, Error, Object, Value};

/// Asserts that `name` resolves on `decorated` to exactly what the wrapped
/// instance reports for it right now.
pub fn assert_reads_through<T: Object + 'static>(decorated: &Decorator<T>, name: &str) {
    let direct = decorated
        .undecorated()
        .get_member(name)
        .expect("expected wrapped member");
    let resolved = decorated.resolve(name).expect("resolve failed");
    assert_eq!(resolved, direct, "member '{}' did not read through", name);
}

pub fn assert_not_found<T: Object + 'static>(decorated: &Decorator<T>, name: &str) {
    match decorated.resolve(name) {
        Err(Error::MemberNotFound { name: missing, .. }) => assert_eq!(missing, name),
        other => panic!("expected MemberNotFound for '{}', got {:?}", name, other),
    }
}

pub fn as_object<T: Object + 'static>(rc: Rc<T>) -> Value {
    let obj: Rc<dyn Object> = rc;
    Value::Object(obj)
}
