//! Post-logout landing page

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LogoutPage)]
pub fn logout_page() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-teal-50 to-blue-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-2xl shadow-xl p-8 text-center">
                <h1 class="text-2xl font-bold text-gray-800 mb-2">{"You have been logged out"}</h1>
                <p class="text-gray-600 mb-6">
                    {"Thank you for using MindWell. To keep your account safe, sessions \
                      end automatically after 15 minutes of inactivity."}
                </p>
                <Link<Route>
                    to={Route::Auth}
                    classes="inline-block px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white font-semibold rounded-lg"
                >
                    {"Sign in again"}
                </Link<Route>>
            </div>
        </div>
    }
}
