//! The embedded swatch page.
//!
//! The page is fully self-contained: style sheet and script are inline and
//! nothing is fetched at load time.
//!
//! Template variables are the fields of [`RenderContext`](crate::RenderContext).

/// Registered name of the page template. The `.html` suffix turns on
/// HTML auto-escaping.
pub const PAGE_TEMPLATE_NAME: &str = "palette.html";

/// Page template source.
pub const PAGE_TEMPLATE: &str = r##"{%- macro swatch(color, class) -%}
<div class="{{ class }}" data-swatch="{{ color.name }}" style="background-color: {{ color.hex }}">
                    <span class="color-text label-{{ color.hex | label_tone }}">{{ color.name }}</span>
                    <span class="color-text label-{{ color.hex | label_tone }}">{{ color.hex }}</span>
                </div>
{%- endmacro -%}
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Color Palette</title>
    <style>
        :root {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, 'Helvetica Neue', sans-serif;
            line-height: 1.6;
            color: #333;
        }
        body {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        h1, h2 {
            margin-top: 1.5em;
            margin-bottom: 0.5em;
        }
        .container {
            display: flex;
            flex-direction: column;
            gap: 20px;
        }
        .info {
            background-color: #f5f5f5;
            padding: 15px;
            border-radius: 5px;
        }
        .palette-section {
            margin-bottom: 30px;
        }
        .palette {
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
            margin-bottom: 20px;
        }
        .color-block, .accent-item {
            border-radius: 5px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            font-family: monospace;
            word-break: break-all;
            padding: 5px;
            text-align: center;
            color: rgba(0,0,0,0.7);
        }
        .color-block {
            width: 100px;
            height: 100px;
            font-size: 0.8em;
            transition: transform 0.2s;
        }
        .color-block:hover {
            transform: scale(1.05);
        }
        .primary-block {
            width: 150px;
            height: 150px;
            font-size: 1em;
        }
        .accent-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(80px, 1fr));
            gap: 10px;
            margin-top: 10px;
        }
        .accent-item {
            width: 100%;
            height: 80px;
            font-size: 0.7em;
        }
        .color-text {
            display: block;
            line-height: 1.2;
        }
        .label-dark {
            color: rgba(0,0,0,0.7);
            text-shadow: 0 0 5px rgba(255,255,255,0.7);
        }
        .label-light {
            color: rgba(255,255,255,0.9);
            text-shadow: 0 0 5px rgba(0,0,0,0.5);
        }
    </style>
    <script>
        function expandHex(hex) {
            const clean = hex.startsWith('#') ? hex.slice(1) : hex;
            return clean.length === 3 ? clean.split('').map(c => c + c).join('') : clean;
        }

        function channelsOf(color) {
            const rgb = color.match(/^rgba?\((\d+),\s*(\d+),\s*(\d+)/);
            if (rgb) {
                return [parseInt(rgb[1], 10), parseInt(rgb[2], 10), parseInt(rgb[3], 10)];
            }
            if (color.startsWith('#')) {
                const full = expandHex(color);
                return [0, 2, 4].map(i => parseInt(full.substr(i, 2), 16));
            }
            return null;
        }

        function labelColor(channels) {
            const [r, g, b] = channels;
            const luma = 0.299 * r + 0.587 * g + 0.114 * b;
            return luma >= 128 ? 'rgba(0,0,0,0.7)' : 'rgba(255,255,255,0.9)';
        }

        document.addEventListener('DOMContentLoaded', () => {
            document.querySelectorAll('[data-swatch]').forEach(block => {
                const channels = channelsOf(block.style.backgroundColor);
                if (!channels || channels.some(Number.isNaN)) {
                    return;
                }
                block.querySelectorAll('.color-text').forEach(label => {
                    label.style.color = labelColor(channels);
                });
            });
        });
    </script>
</head>
<body>
    <div class="container">
        <h1>Color Palette</h1>

        <div class="info">
            <p><strong>Wallpaper:</strong> {{ wallpaper }}</p>
            <p><strong>Mode:</strong> {{ mode }}</p>
            <p>Color values are parsed from the provided CSS file's <code>:root</code> variables.</p>
        </div>

        <div class="palette-section">
            <h2>Primary Colors</h2>
            <div class="palette" id="primary-palette">
                {%- for color in primary %}
                {{ swatch(color, "color-block primary-block") }}
                {%- endfor %}
            </div>

            <h2>Text Colors</h2>
            <div class="palette" id="text-palette">
                {%- for color in text %}
                {{ swatch(color, "color-block") }}
                {%- endfor %}
            </div>
        </div>

        <div class="palette-section">
            <h2>Accent Colors</h2>
            <div class="accent-grid" id="accent-grid">
                {%- for color in accents %}
                {{ swatch(color, "accent-item") }}
                {%- endfor %}
            </div>
        </div>
    </div>
</body>
</html>
"##;
