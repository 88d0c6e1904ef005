//! Partial application for two- and three-argument functions.
//!
//! `curry2(f)(a)(b)` equals `f(a, b)`, with every stage a reusable
//! closure. Captured arguments are cloned into each later stage, so a
//! partial can be applied any number of times.

/// Curry a two-argument function into two single-argument stages.
///
/// ## Example
///
/// ```
/// use emitter_rust::curry2;
///
/// let greet = curry2(|greeting: String, name: String| format!("{}, {}!", greeting, name));
/// let hello = greet("Hello".to_string());
///
/// assert_eq!(hello("Ada".to_string()), "Hello, Ada!");
/// assert_eq!(hello("Grace".to_string()), "Hello, Grace!");
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curry a three-argument function into three single-argument stages.
///
/// ## Example
///
/// ```
/// use emitter_rust::curry3;
///
/// let log = curry3(|level: String, topic: String, message: String| {
///     format!("[{}] {}: {}", level, topic, message)
/// });
/// let warn = log("warn".to_string());
/// let disk = warn("disk".to_string());
///
/// assert_eq!(disk("almost full".to_string()), "[warn] disk: almost full");
/// assert_eq!(disk("read-only".to_string()), "[warn] disk: read-only");
/// ```
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}
