use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::{HireRequest, Profile};

use super::components::{Button, TextField};

/// Overlay showing the full profile record while `open` is true.
/// Visibility is owned entirely by the parent; closing just invokes the
/// parent's callback.
#[component]
pub fn ProfileModal(
    open: ReadSignal<bool>,
    on_close: Callback<()>,
    profile: Profile,
) -> impl IntoView {
    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center">
                            <div class="bg-white p-6 rounded-lg w-full max-w-md shadow-lg dark:bg-gray-800">
                                <h2 class="text-2xl font-bold mb-4 text-gray-800 dark:text-gray-200">
                                    "My Profile"
                                </h2>
                                <div class="flex items-center mb-4">
                                    <img
                                        src=profile.avatar
                                        alt="Profile"
                                        class="w-24 h-24 rounded-full mr-4 border-4 border-purple-500"
                                    />
                                    <div>
                                        <h3 class="text-lg font-semibold text-gray-800 dark:text-gray-200">
                                            {profile.name}
                                        </h3>
                                        <p class="text-gray-600 dark:text-gray-400">
                                            {profile.location}
                                        </p>
                                    </div>
                                </div>
                                <ul class="space-y-2 text-gray-800 dark:text-gray-300">
                                    <li>
                                        <strong>"GitHub: "</strong>
                                        <a
                                            href=profile.github
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600"
                                        >
                                            {profile.github}
                                        </a>
                                    </li>
                                    <li>
                                        <strong>"Instagram: "</strong>
                                        <a
                                            href=profile.instagram
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600"
                                        >
                                            {profile.instagram}
                                        </a>
                                    </li>
                                    <li>
                                        <strong>"LinkedIn: "</strong>
                                        <a
                                            href=profile.linkedin
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600"
                                        >
                                            {profile.linkedin}
                                        </a>
                                    </li>
                                    <li>
                                        <strong>"Marital Status: "</strong>
                                        {profile.marital_status}
                                    </li>
                                    <li>
                                        <strong>"Date of Birth: "</strong>
                                        {profile.date_of_birth_display()}
                                    </li>
                                    <li>
                                        <strong>"Current Location: "</strong>
                                        {profile.location}
                                    </li>
                                </ul>
                                <Button class="mt-4 bg-gray-500 hover:bg-gray-600 w-full" on_click=on_close>
                                    "Close"
                                </Button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Hire-me contact form. The three field values are the only state owned
/// here; they reset whenever the modal closes or submits, so nothing
/// survives a dismissal.
#[component]
pub fn HireModal(
    open: ReadSignal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<HireRequest>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());

    let reset = move || {
        set_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
    };
    let close = Callback::new(move |()| {
        reset();
        on_close.run(());
    });
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(HireRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
        });
        reset();
        on_close.run(());
    };

    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center">
                            <div class="bg-white p-6 rounded-lg w-full max-w-md shadow-lg dark:bg-gray-800">
                                <h2 class="text-2xl font-bold mb-4 text-gray-800 dark:text-gray-200">
                                    "Hire Me"
                                </h2>
                                <form on:submit=handle_submit>
                                    <TextField label="Name" value=name set_value=set_name />
                                    <TextField
                                        label="Email"
                                        input_type="email"
                                        value=email
                                        set_value=set_email
                                    />
                                    <TextField
                                        label="Phone"
                                        input_type="tel"
                                        value=phone
                                        set_value=set_phone
                                    />
                                    <Button submit=true class="bg-blue-600 hover:bg-blue-700 w-full">
                                        "Submit"
                                    </Button>
                                    <Button class="mt-4 bg-gray-500 hover:bg-gray-600 w-full" on_click=close>
                                        "Close"
                                    </Button>
                                </form>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
