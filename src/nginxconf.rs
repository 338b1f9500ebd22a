use crate::vhost::VirtualHost;

/// Render a complete `server` block for the virtual host.
#[must_use]
pub fn render(vhost: &VirtualHost) -> String {
    let server_name = if vhost.server_names.is_empty() {
        String::new()
    } else {
        format!("    server_name {};\n", vhost.server_names.join(" "))
    };

    format!(
        "server {{\n    \
           listen {listen};\n\
         {server_name}\n    \
           root {root};\n    \
           index {index};\n\n    \
           location / {{\n        \
             try_files {try_files};\n    \
           }}\n\
         }}\n",
        listen = vhost.listen,
        root = vhost.root.display(),
        index = vhost.index,
        try_files = vhost.try_files,
    )
}
