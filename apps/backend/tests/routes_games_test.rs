mod common;

use actix_web::test;
use serde_json::json;

#[actix_web::test]
async fn test_create_then_get_round_trip() {
    let app = common::create_test_app(common::test_state().await).await;

    let created = common::create_game(&app, &common::game_body("Metal Gear Solid")).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(created["title"], "Metal Gear Solid");
    assert_eq!(created["releaseYear"], 1998);
    assert_eq!(created["platforms"], json!(["PlayStation"]));
    assert_eq!(created["mainCharacters"], json!([]));
    assert_eq!(created["enemies"], json!([]));
    assert!(created["createdAt"].as_str().is_some());

    // The generated id is usable immediately in a get-by-id call
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched = common::read_json(resp).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], created["title"]);
    assert_eq!(fetched["updatedAt"], created["updatedAt"]);
}

#[actix_web::test]
async fn test_create_missing_required_fields() {
    let app = common::create_test_app(common::test_state().await).await;

    // Removing any one required field yields a 400 naming exactly that field
    for field in [
        "title",
        "releaseYear",
        "platforms",
        "genre",
        "description",
        "developer",
    ] {
        let mut body = common::game_body("Snatcher");
        body.as_object_mut().unwrap().remove(field);

        let req = test::TestRequest::post()
            .uri("/api/v1/games/create")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "missing {field}");
        let problem = common::read_json(resp).await;
        assert_eq!(
            problem["detail"],
            format!("The field \"{field}\" is required"),
        );
        assert_eq!(problem["code"], "MISSING_FIELD");
    }

    // Falsy values count as missing: empty string, zero, null
    for (field, value) in [
        ("title", json!("")),
        ("releaseYear", json!(0)),
        ("platforms", json!(null)),
    ] {
        let mut body = common::game_body("Snatcher");
        body[field] = value;

        let req = test::TestRequest::post()
            .uri("/api/v1/games/create")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "falsy {field}");
        let problem = common::read_json(resp).await;
        assert_eq!(
            problem["detail"],
            format!("The field \"{field}\" is required"),
        );
    }

    // None of the rejected creates persisted anything
    let req = test::TestRequest::get().uri("/api/v1/games").to_request();
    let resp = test::call_service(&app, req).await;
    let listing = common::read_json(resp).await;
    assert_eq!(listing["totalGames"], 0);
}

#[actix_web::test]
async fn test_create_checks_fields_in_declared_order() {
    let app = common::create_test_app(common::test_state().await).await;

    // With several fields missing, the first in declared order is reported
    let req = test::TestRequest::post()
        .uri("/api/v1/games/create")
        .set_json(json!({ "developer": "Konami" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let problem = common::read_json(resp).await;
    assert_eq!(problem["detail"], "The field \"title\" is required");
}

#[actix_web::test]
async fn test_create_accepts_empty_platforms_list() {
    let app = common::create_test_app(common::test_state().await).await;

    // Presence, not content, is checked: an empty list passes
    let mut body = common::game_body("Policenauts");
    body["platforms"] = json!([]);
    let created = common::create_game(&app, &body).await;
    assert_eq!(created["platforms"], json!([]));
}

#[actix_web::test]
async fn test_duplicate_title_surfaces_as_generic_500() {
    let app = common::create_test_app(common::test_state().await).await;

    common::create_game(&app, &common::game_body("Metal Gear Solid")).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games/create")
        .set_json(common::game_body("Metal Gear Solid"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);
    let problem = common::read_json(resp).await;
    assert_eq!(problem["code"], "DB_ERROR");
    // Constraint detail never reaches the caller
    assert_eq!(problem["detail"], "Internal server error");
}

#[actix_web::test]
async fn test_get_invalid_id_is_400_never_404() {
    let app = common::create_test_app(common::test_state().await).await;

    for uri in [
        "/api/v1/games/abc",
        "/api/v1/games/5f3a9c0e1b2d4f6a8c0e1b2z", // right length, non-hex
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri}");
        let problem = common::read_json(resp).await;
        assert_eq!(problem["detail"], "Invalid GameID format");
        assert_eq!(problem["code"], "INVALID_GAME_ID");
    }
}

#[actix_web::test]
async fn test_get_unknown_wellformed_id_is_404() {
    let app = common::create_test_app(common::test_state().await).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/games/aaaaaaaaaaaaaaaaaaaaaaaa")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let problem = common::read_json(resp).await;
    assert_eq!(problem["detail"], "GameID Not Found");
    assert_eq!(problem["code"], "GAME_NOT_FOUND");
}

#[actix_web::test]
async fn test_full_update_replaces_listed_fields() {
    let app = common::create_test_app(common::test_state().await).await;

    let mut body = common::game_body("Metal Gear");
    body["enemies"] = json!(["Big Boss"]);
    let created = common::create_game(&app, &body).await;
    let id = created["id"].as_str().unwrap();

    let update = json!({
        "title": "Metal Gear 2: Solid Snake",
        "releaseYear": 1990,
        "platforms": ["MSX2"],
        "genre": "Stealth",
        "description": "Solid Snake infiltrates Zanzibar Land.",
        "developer": "Konami",
        "mainCharacters": ["5f3a9c0e1b2d4f6a8c0e1b2d"],
    });
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/games/update/{id}"))
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated = common::read_json(resp).await;
    assert_eq!(updated["title"], "Metal Gear 2: Solid Snake");
    assert_eq!(updated["releaseYear"], 1990);
    assert_eq!(updated["mainCharacters"], json!(["5f3a9c0e1b2d4f6a8c0e1b2d"]));
    // Create-only fields are not touched by updates
    assert_eq!(updated["enemies"], json!(["Big Boss"]));
}

#[actix_web::test]
async fn test_full_update_requires_main_characters() {
    let app = common::create_test_app(common::test_state().await).await;

    let created = common::create_game(&app, &common::game_body("Metal Gear")).await;
    let id = created["id"].as_str().unwrap();

    // The create body alone is not enough for a full update: the reference
    // list is required on update but not on create.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/games/update/{id}"))
        .set_json(common::game_body("Metal Gear"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let problem = common::read_json(resp).await;
    assert_eq!(problem["detail"], "The field \"mainCharacters\" is required");
}

#[actix_web::test]
async fn test_full_update_unknown_id_is_404() {
    let app = common::create_test_app(common::test_state().await).await;

    let mut update = common::game_body("Metal Gear");
    update["mainCharacters"] = json!([]);
    let req = test::TestRequest::put()
        .uri("/api/v1/games/update/aaaaaaaaaaaaaaaaaaaaaaaa")
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_patch_merges_only_present_truthy_fields() {
    let app = common::create_test_app(common::test_state().await).await;

    let created = common::create_game(&app, &common::game_body("Metal Gear Solid")).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/games/update/{id}"))
        .set_json(json!({ "genre": "Tactical Espionage Action", "releaseYear": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let patched = common::read_json(resp).await;
    // genre merged; falsy releaseYear ignored; everything else untouched
    assert_eq!(patched["genre"], "Tactical Espionage Action");
    assert_eq!(patched["releaseYear"], 1998);
    assert_eq!(patched["title"], "Metal Gear Solid");
}

#[actix_web::test]
async fn test_patch_with_no_recognized_fields_is_a_noop() {
    let app = common::create_test_app(common::test_state().await).await;

    let created = common::create_game(&app, &common::game_body("Metal Gear Solid")).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/games/update/{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let unchanged = common::read_json(resp).await;
    assert_eq!(unchanged["title"], "Metal Gear Solid");
    assert_eq!(unchanged["updatedAt"], created["updatedAt"]);
}

#[actix_web::test]
async fn test_patch_invalid_id_is_400() {
    let app = common::create_test_app(common::test_state().await).await;

    let req = test::TestRequest::patch()
        .uri("/api/v1/games/update/abc")
        .set_json(json!({ "genre": "Stealth" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let problem = common::read_json(resp).await;
    assert_eq!(problem["detail"], "Invalid GameID format");
}

#[actix_web::test]
async fn test_patch_unknown_id_is_404() {
    let app = common::create_test_app(common::test_state().await).await;

    let req = test::TestRequest::patch()
        .uri("/api/v1/games/update/aaaaaaaaaaaaaaaaaaaaaaaa")
        .set_json(json!({ "genre": "Stealth" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_delete_then_delete_again() {
    let app = common::create_test_app(common::test_state().await).await;

    let created = common::create_game(&app, &common::game_body("Metal Gear Solid")).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let confirmation = common::read_json(resp).await;
    assert_eq!(confirmation["message"], "Game deleted successfully");

    // The record is gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    // Deleting again reports not found
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_delete_invalid_id_is_400() {
    let app = common::create_test_app(common::test_state().await).await;

    let req = test::TestRequest::delete()
        .uri("/api/v1/games/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_list_populates_main_characters_as_names_only() {
    let app = common::create_test_app(common::test_state().await).await;

    let mut character_ids = Vec::new();
    for name in ["Solid Snake", "Meryl Silverburgh", "Otacon"] {
        let created = common::create_character(&app, &common::character_body(name)).await;
        character_ids.push(created["id"].as_str().unwrap().to_string());
    }

    // Reference the three characters plus one dangling id
    let mut body = common::game_body("Metal Gear Solid");
    let mut refs = character_ids.clone();
    refs.push("aaaaaaaaaaaaaaaaaaaaaaaa".to_string());
    body["mainCharacters"] = json!(refs);
    common::create_game(&app, &body).await;

    let req = test::TestRequest::get().uri("/api/v1/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let listing = common::read_json(resp).await;
    assert_eq!(listing["totalGames"], 1);

    let populated = listing["games"][0]["mainCharacters"].as_array().unwrap();
    // The dangling reference resolves as absent and is dropped
    assert_eq!(populated.len(), 3);
    for (entry, expected_id) in populated.iter().zip(&character_ids) {
        // Each character is projected to its name only
        let fields = entry.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(entry["id"], expected_id.as_str());
        assert!(entry["name"].as_str().is_some());
    }
}
