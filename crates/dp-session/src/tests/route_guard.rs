use crate::route_guard::{LOGIN_PATH, RouteDecision, evaluate_route};

use dp_core::{UserIdentity, UserRole};

fn identity(role: UserRole) -> UserIdentity {
    UserIdentity::for_login("someone@example.com", role)
}

#[test]
fn given_no_identity_when_route_requires_patient_then_redirect_to_login() {
    let decision = evaluate_route(false, None, UserRole::Patient);

    assert_eq!(decision, RouteDecision::Redirect(LOGIN_PATH.to_string()));
}

#[test]
fn given_dentist_identity_when_route_requires_patient_then_redirect_to_own_dashboard() {
    let user = identity(UserRole::Dentist);

    let decision = evaluate_route(false, Some(&user), UserRole::Patient);

    assert_eq!(
        decision,
        RouteDecision::Redirect("/dentist/dashboard".to_string())
    );
}

#[test]
fn given_patient_identity_when_route_requires_dentist_then_redirect_to_own_dashboard() {
    let user = identity(UserRole::Patient);

    let decision = evaluate_route(false, Some(&user), UserRole::Dentist);

    assert_eq!(
        decision,
        RouteDecision::Redirect("/patient/dashboard".to_string())
    );
}

#[test]
fn given_matching_role_when_evaluated_then_render() {
    let user = identity(UserRole::Patient);

    let decision = evaluate_route(false, Some(&user), UserRole::Patient);

    assert_eq!(decision, RouteDecision::Render);
}

#[test]
fn given_loading_when_evaluated_then_loading_regardless_of_identity() {
    let user = identity(UserRole::Patient);

    assert_eq!(
        evaluate_route(true, Some(&user), UserRole::Patient),
        RouteDecision::Loading
    );
    assert_eq!(
        evaluate_route(true, None, UserRole::Dentist),
        RouteDecision::Loading
    );
}

#[test]
fn given_decision_when_displayed_then_redirect_includes_target() {
    assert_eq!(RouteDecision::Render.to_string(), "render");
    assert_eq!(RouteDecision::Loading.to_string(), "loading");
    assert_eq!(
        RouteDecision::Redirect("/login".to_string()).to_string(),
        "redirect(/login)"
    );
}
