/// Docker Compose manifest.
///
/// Every `${VAR}` is left for Compose to fill in from `.env`.
pub const COMPOSE_MANIFEST: &str = r#"name: ${PROJECT_NAME}

services:
  db:
    image: mysql:8.0
    restart: unless-stopped
    environment:
      MYSQL_DATABASE: ${DB_NAME}
      MYSQL_USER: ${DB_USER}
      MYSQL_PASSWORD: ${DB_PASSWORD}
      MYSQL_ROOT_PASSWORD: ${DB_ROOT_PASSWORD}
    volumes:
      - db_data:/var/lib/mysql

  wordpress:
    image: wordpress:${WP_VERSION}
    restart: unless-stopped
    depends_on:
      - db
    ports:
      - "${WP_PORT}:80"
    environment:
      WORDPRESS_DB_HOST: db:3306
      WORDPRESS_DB_NAME: ${DB_NAME}
      WORDPRESS_DB_USER: ${DB_USER}
      WORDPRESS_DB_PASSWORD: ${DB_PASSWORD}
      WORDPRESS_DEBUG: "1"
    volumes:
      - wp_data:/var/www/html
      - ./src:/var/www/html/wp-content/themes/${PROJECT_NAME}
      - ./config/uploads.ini:/usr/local/etc/php/conf.d/uploads.ini:ro
      - ./config/timeouts.conf:/etc/apache2/conf-enabled/timeouts.conf:ro

  wpcli:
    image: wordpress:cli
    user: "33:33"
    depends_on:
      - db
      - wordpress
    environment:
      WORDPRESS_DB_HOST: db:3306
      WORDPRESS_DB_NAME: ${DB_NAME}
      WORDPRESS_DB_USER: ${DB_USER}
      WORDPRESS_DB_PASSWORD: ${DB_PASSWORD}
      WP_PLUGINS: ${WP_PLUGINS}
    volumes:
      - wp_data:/var/www/html
      - ./config/init-plugins.sh:/usr/local/bin/init-plugins.sh:ro
    entrypoint: ["sh", "/usr/local/bin/init-plugins.sh"]

volumes:
  db_data:
  wp_data:
"#;
