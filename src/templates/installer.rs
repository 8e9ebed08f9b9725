/// Plugin installer run by the `wpcli` container.
///
/// The slugs come from `WP_PLUGINS` at container start, never from this
/// program.
pub const INSTALLER_SCRIPT: &str = r#"#!/bin/sh
set -e

echo "Waiting for WordPress to be installed..."
until wp core is-installed --path=/var/www/html >/dev/null 2>&1; do
  sleep 5
done

if [ -z "${WP_PLUGINS}" ]; then
  echo "No plugins requested."
  exit 0
fi

for plugin in ${WP_PLUGINS}; do
  if wp plugin is-installed "$plugin" --path=/var/www/html >/dev/null 2>&1; then
    echo "Plugin already installed: $plugin"
    wp plugin activate "$plugin" --path=/var/www/html || true
  else
    echo "Installing plugin: $plugin"
    wp plugin install "$plugin" --activate --path=/var/www/html
  fi
done

echo "Plugin installation complete."
"#;
