// fn main not required
//
// All tests here drive the real server over HTTP against a throwaway
// postgres database, so they are `#[ignore]`d by default; bring the db up
// with scripts/init_db.sh and run them with `cargo test -- --ignored`.
mod api_projects;
mod health_check;
mod home;
mod login;
mod projects;
