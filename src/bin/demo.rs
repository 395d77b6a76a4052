//! FolioDB Demo Binary
//!
//! Populates a `users` collection with sample records, deletes one, lists
//! what is left and runs an age query against it.

use clap::Parser;
use foliodb::{document, Config, Document, Driver};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// FolioDB demo
#[derive(Parser, Debug)]
#[command(name = "foliodb-demo")]
#[command(about = "Populate and query a sample FolioDB collection")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./foliodb_data")]
    data_dir: String,

    /// Age to query for
    #[arg(short, long, default_value = "30")]
    age: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
    city: String,
    state: String,
    country: String,
    pincode: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    age: u32,
    contact: String,
    company: String,
    address: Address,
}

const COLLECTION: &str = "users";

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foliodb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("FolioDB demo v{}", foliodb::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder().data_dir(&args.data_dir).build();

    let db = match Driver::open(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    for user in sample_users() {
        if let Err(e) = db.write(COLLECTION, &user.name, &user) {
            tracing::error!("Error writing user {}: {}", user.name, e);
        }
    }

    if let Err(e) = db.delete(COLLECTION, "John") {
        tracing::error!("Error deleting user John: {}", e);
    }

    match db.read_all_as::<User>(COLLECTION) {
        Ok(users) => {
            for user in users {
                println!("User: {:?}", user);
            }
        }
        Err(e) => tracing::error!("Error reading users: {}", e),
    }

    let age = f64::from(args.age);
    match db.query(COLLECTION, |doc: &Document| {
        document::lookup_f64(doc, "Age") == Some(age)
    }) {
        Ok(matches) => {
            println!("Users with Age {}:", args.age);
            for doc in matches {
                println!("User: {}", serde_json::Value::Object(doc));
            }
        }
        Err(e) => tracing::error!("Error querying users: {}", e),
    }
}

fn sample_users() -> Vec<User> {
    [
        ("John", 25, "Google", "Bangalore", "Karnataka", "560001"),
        ("Doe", 30, "Microsoft", "Hyderabad", "Telangana", "500001"),
        ("Smith", 35, "Amazon", "Chennai", "Tamilnadu", "600001"),
        ("Tom", 40, "Facebook", "Mumbai", "Maharashtra", "400001"),
        ("Jerry", 45, "Apple", "Pune", "Maharashtra", "411001"),
        ("Mickey", 50, "Tesla", "Kolkata", "West Bengal", "700001"),
    ]
    .into_iter()
    .map(|(name, age, company, city, state, pincode)| User {
        name: name.to_string(),
        age,
        contact: "1234567890".to_string(),
        company: company.to_string(),
        address: Address {
            city: city.to_string(),
            state: state.to_string(),
            country: "India".to_string(),
            pincode: pincode.to_string(),
        },
    })
    .collect()
}
