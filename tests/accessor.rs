use doc_cookies::{CookieAccessor, CookieStore, MemoryStore, WriteOptions};

fn accessor() -> (MemoryStore, CookieAccessor<MemoryStore>) {
    let store = MemoryStore::new();
    (store.clone(), CookieAccessor::new(store))
}

#[test]
fn write_then_read() {
    let (_, cookies) = accessor();

    cookies.write("a", "1", &WriteOptions::new());

    let map = cookies.read();
    assert_eq!(map.get("a").map(String::as_str), Some("1"));
}

#[test]
fn delete_flag_removes_cookie() {
    let (_, cookies) = accessor();

    cookies.write("a", "1", &WriteOptions::new());
    cookies.write("a", "1", &WriteOptions::new().del(true));

    assert!(!cookies.read().contains_key("a"));
}

#[test]
fn max_age_directive_renders_number() {
    let (store, cookies) = accessor();

    cookies.write("a", "1", &WriteOptions::new().max_age(60));

    let directive = store.last_directive().unwrap();
    assert!(directive.ends_with("; max-age=60"));
    assert!(!directive.contains("toString"));
}

#[test]
fn permanent_directive() {
    let (store, cookies) = accessor();

    cookies.write("a", "1", &WriteOptions::new().permanent(true));

    assert!(
        store
            .last_directive()
            .unwrap()
            .ends_with("; expires=Thu, 19 Jan 2038 00:00:00 GMT")
    );
    assert_eq!(cookies.read()["a"], "1");
}

#[test]
fn empty_store_reads_empty_and_is_idempotent() {
    let (_, cookies) = accessor();

    let first = cookies.read();
    let second = cookies.read();

    assert!(first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn fragments_follow_fixed_order_for_every_combination() {
    for mask in 0u8..16 {
        let max_age = mask & 1 != 0;
        let expires_at = mask & 2 != 0;
        let del = mask & 4 != 0;
        let permanent = mask & 8 != 0;

        // Supply the options in reverse of the rendered order
        let mut options = WriteOptions::new().permanent(permanent).del(del);
        if expires_at {
            options = options.expires_at("tomorrow");
        }
        if max_age {
            options = options.max_age(30);
        }

        let mut expected = String::from("a=1; Secure; SameSite=Lax");
        if max_age {
            expected.push_str("; max-age=30");
        }
        if expires_at {
            expected.push_str("; expires-at=tomorrow");
        }
        if del {
            expected.push_str("; max-age=0");
        }
        if permanent {
            expected.push_str("; expires=Thu, 19 Jan 2038 00:00:00 GMT");
        }

        let (store, cookies) = accessor();
        cookies.write("a", "1", &options);

        assert_eq!(store.last_directive().unwrap(), expected, "mask {mask:04b}");
        assert_eq!(cookies.read().contains_key("a"), !del, "mask {mask:04b}");
    }
}

#[test]
fn delete_wins_over_max_age_and_permanent() {
    let (_, cookies) = accessor();

    cookies.write(
        "a",
        "1",
        &WriteOptions::new().max_age(3600).permanent(true).del(true),
    );

    assert!(cookies.read().is_empty());
}

#[test]
fn insecure_context_silently_drops_writes() {
    let store = MemoryStore::insecure();
    let cookies = CookieAccessor::new(store.clone());

    cookies.write("a", "1", &WriteOptions::new());

    assert!(cookies.read().is_empty());
    assert_eq!(store.directives(), vec!["a=1; Secure; SameSite=Lax"]);
}

#[test]
fn values_with_equals_read_back_intact() {
    let (_, cookies) = accessor();

    cookies.write("token", "YWJj==", &WriteOptions::new());

    assert_eq!(cookies.get("token").as_deref(), Some("YWJj=="));
}

#[test]
fn later_duplicate_wins_on_read() {
    let cookies = CookieAccessor::new(MemoryStore::from_raw("a=1; b=2; a=3"));

    let map = cookies.read();

    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], "3");
}

#[test]
fn expires_at_does_not_expire() {
    let (store, cookies) = accessor();

    cookies.write(
        "a",
        "1",
        &WriteOptions::new().expires_at("Thu, 01 Jan 1970 00:00:00 GMT"),
    );

    assert_eq!(store.get(), "a=1");
}

#[test]
fn store_serialization_matches_browser_format() {
    let (store, cookies) = accessor();

    cookies.write("a", "1", &WriteOptions::new());
    cookies.write("b", "2", &WriteOptions::new());
    cookies.write("a", "3", &WriteOptions::new());

    assert_eq!(store.get(), "a=3; b=2");
}
