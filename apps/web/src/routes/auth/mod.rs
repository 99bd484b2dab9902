//! The auth flow: one page owning the screen state machine.
//!
//! `AuthScreen` is a single tagged state, so the page cannot show two
//! screens at once and toggles are plain `screen.set(..)` calls. Each
//! subview submits through its own `Action`, whose `pending()` signal
//! disables re-submission for the duration of the round trip.

mod forgot_password;
mod sign_in;
mod sign_up;
mod verification_pending;

use account_core::AuthScreen;
use forgot_password::ForgotPasswordScreen;
use leptos::prelude::*;
use sign_in::SignInScreen;
use sign_up::SignUpScreen;
use verification_pending::VerificationPendingScreen;

#[component]
pub fn AuthPage() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::default());

    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                {move || match screen.get() {
                    AuthScreen::SignIn => view! { <SignInScreen screen /> }.into_any(),
                    AuthScreen::SignUp => view! { <SignUpScreen screen /> }.into_any(),
                    AuthScreen::ForgotPassword { link_sent } => {
                        view! { <ForgotPasswordScreen screen link_sent /> }.into_any()
                    }
                    AuthScreen::VerificationPending => {
                        view! { <VerificationPendingScreen screen /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
