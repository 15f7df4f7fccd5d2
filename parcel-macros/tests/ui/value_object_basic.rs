use parcel_macros::value_object;

#[value_object]
#[serde(rename_all = "lowercase")]
enum Status {
    Registered,
    Sent,
}

#[value_object(default = true)]
struct Address {
    line: String,
}

#[value_object(debug = false)]
struct Opaque(i32);

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque(..)")
    }
}

fn main() {
    assert_eq!(serde_json::to_string(&Status::Sent).unwrap(), "\"sent\"");
    assert_ne!(Status::Registered, Status::Sent);
    let _ = format!("{:?}", Status::Registered.clone());

    let a = Address::default();
    assert_eq!(a.line, "");
    assert_eq!(a.clone(), Address { line: String::new() });

    // debug = false 时使用手写 Debug
    assert_eq!(format!("{:?}", Opaque(1)), "Opaque(..)");
}
