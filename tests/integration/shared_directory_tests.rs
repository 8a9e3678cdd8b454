//! Concurrent access through `SharedDirectory`
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use account_directory_common::{Request, Response};
use account_directory_lib::{SequenceTokenGenerator, SharedDirectory};

#[test]
fn test_concurrent_account_creation_is_unique() {
    let shared = SharedDirectory::default();
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                shared.create_account("alice", "pw1")
            })
        })
        .collect();

    let created = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|created| *created)
        .count();
    assert_eq!(created, 1);
    assert_eq!(shared.with(|dir| dir.len()), 1);
}

#[test]
fn test_concurrent_users_do_not_interfere() {
    let shared = SharedDirectory::default();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let name = format!("user{i}");
                assert!(shared.create_account(&name, "pw"));
                assert!(shared.login(&name, "pw"));
                let token = shared.generate_token(&name).unwrap();
                assert_eq!(shared.change_password(&name, &token, "new"), Ok(true));
                shared.logout_user(&name).unwrap();
                name
            })
        })
        .collect();

    let names: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names.len(), 8);
    for name in &names {
        assert_eq!(shared.user_logged_in(name), Ok(false));
        assert!(shared.login(name, "new"));
    }
}

#[test]
fn test_handle_requests() {
    let shared = SharedDirectory::with_token_generator(SequenceTokenGenerator::new(["864209"]));

    let responses: Vec<Response> = [
        "create erin pw1",
        "token erin",
        "change-password erin 864209 pw2",
        "login erin pw2",
    ]
    .iter()
    .map(|line| shared.handle(line.parse::<Request>().unwrap()))
    .collect();

    assert_eq!(
        responses,
        vec![
            Response::Answer { value: true },
            Response::Token {
                token: "864209".to_string()
            },
            Response::Answer { value: true },
            Response::Answer { value: true },
        ]
    );
}
