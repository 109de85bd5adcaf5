// End-to-end tests for the MailBot Backend API
//
// Each test boots the full axum app on an ephemeral port with the OpenAI
// repository swapped for a scripted stub, so every HTTP-visible behavior
// (validation, prompt assembly, failure mapping, headers) runs through the
// real router and middleware without touching the provider.
//
// Tests run in parallel by default; every test gets its own server and its
// own stub, so there is no shared state to serialize on.

mod test_client_flow;
