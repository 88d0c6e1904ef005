use std::error::Error;
use std::thread;
use std::time::Duration;

use emitter_rust::{
    curry3, deep_merge, run_sequential, Debounce, Event, EventEmitter, InMemoryValueStore,
    Storage, Throttle, ValueKind,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug)]
enum AppEvent {
    Greet { name: String },
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AppEventKind {
    Greet,
    Ready,
}

impl Event for AppEvent {
    type Kind = AppEventKind;

    fn kind(&self) -> AppEventKind {
        match self {
            AppEvent::Greet { .. } => AppEventKind::Greet,
            AppEvent::Ready => AppEventKind::Ready,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    age: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // --- event emitter ---

    let bus = EventEmitter::new();

    let greeter = bus.on(AppEventKind::Greet, |event: &AppEvent| {
        if let AppEvent::Greet { name } = event {
            println!("Hello, {}!", name);
        }
    });
    bus.once(AppEventKind::Ready, |_| println!("Ready fired (once)"));

    bus.emit(&AppEvent::Greet {
        name: "Alice".to_string(),
    });
    bus.emit(&AppEvent::Ready);
    // The one-shot is already consumed; nothing prints.
    bus.emit(&AppEvent::Ready);

    bus.off(greeter);
    // No listener left for Greet; nothing prints.
    bus.emit(&AppEvent::Greet {
        name: "Bob".to_string(),
    });

    // --- typed storage ---

    let storage = Storage::new(InMemoryValueStore::new());
    let user = User {
        name: "Alice".to_string(),
        age: 25,
    };

    storage.set("user", &user)?;
    println!("User saved: {}", storage.has("user")?);

    let retrieved: Option<User> = storage.get("user")?;
    println!("Retrieved: {:?}", retrieved);

    storage.remove("user")?;
    println!("After remove: {:?}", storage.get::<User>("user")?);

    // --- deep merge ---

    let profile = json!({ "name": "John", "address": { "city": "NY" }, "hobbies": ["reading"] });
    let update = json!({ "age": 30, "address": { "zip": "10001" }, "hobbies": ["sports"] });
    let merged = deep_merge(&profile, &update);
    println!("Merged profile: {}", merged);
    println!(
        "Kinds: {} / {} / {}",
        ValueKind::of(&merged),
        ValueKind::of(&merged["hobbies"]),
        ValueKind::of(&merged["age"])
    );

    // --- debounce ---

    let mut search = Debounce::new(Duration::from_millis(150), |query: String| {
        println!("You typed: {:?}", query);
    });

    // A typing burst collapses into one delivery of the last value.
    for query in ["r", "ru", "rust"] {
        search.call(query.to_string());
        search.poll();
    }
    thread::sleep(Duration::from_millis(200));
    search.poll();

    // --- throttle ---

    let mut clicks = Throttle::new(Duration::from_millis(150), |n: u32| {
        println!("Click {} passed the throttle", n);
    });

    for n in 1..=3 {
        clicks.call(n); // only the first of the burst passes
    }
    thread::sleep(Duration::from_millis(200));
    clicks.call(4);

    // --- sequential tasks ---

    let tasks: Vec<Box<dyn FnOnce() -> Result<String, String>>> = vec![
        Box::new(|| Ok("Task 1 done".to_string())),
        Box::new(|| Err("Task 2 hit a wall".to_string())),
        Box::new(|| Ok("Task 3 done".to_string())),
    ];

    let report = run_sequential(tasks);
    println!(
        "Sequence finished: {} succeeded, {} failed",
        report.succeeded, report.failed
    );
    for line in report.successes() {
        println!("  {}", line);
    }

    // --- currying ---

    let log_at = curry3(|level: String, topic: String, message: String| {
        format!("[{}] {}: {}", level, topic, message)
    });
    let warn = log_at("warn".to_string());
    let disk = warn("disk".to_string());
    println!("{}", disk("almost full".to_string()));
    println!("{}", disk("read-only".to_string()));

    Ok(())
}
