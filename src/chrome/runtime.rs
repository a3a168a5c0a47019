// ============================================================================
// Navigation runtime — injected client-side screen switcher
// ============================================================================

/// Minimal client-side navigation runtime.
///
/// Delegated click handler over resolved navigation anchors
/// (`[data-screen-link]`): hides the active screen, reveals the target
/// section by id. A target with no matching section is a silent no-op,
/// matching the resolver's tolerance policy. No network, no state beyond
/// the `active` class — the document stays shareable without a server.
pub const NAV_RUNTIME_JS: &str = r#"(function () {
  function showScreen(slug) {
    var target = document.getElementById('screen-' + slug);
    if (!target) {
      return;
    }
    var active = document.querySelector('.screen.active');
    if (active) {
      active.classList.remove('active');
    }
    target.classList.add('active');
  }
  document.addEventListener('click', function (event) {
    var link = event.target.closest('[data-screen-link]');
    if (!link) {
      return;
    }
    event.preventDefault();
    showScreen(link.getAttribute('data-screen-link'));
  });
})();"#;
