//! Built-in artifact templates
//!
//! Rendered with HTML escaping disabled. Every derived value (file stems,
//! mixin lists, field literals) is computed before rendering, so the
//! templates only branch and loop.

/// Serializer module for one model
pub const SERIALIZER_TEMPLATE: &str = r#"# -*- coding: utf-8 -*-
from rest_framework import serializers

from {{module_label}}.models import {{model.name}}


class {{model.name}}Serializer(serializers.ModelSerializer):

    class Meta:
        model = {{model.name}}
        fields = {{model.fields_literal}}
"#;

/// Viewset module for one model
pub const VIEWSET_TEMPLATE: &str = r#"# -*- coding: utf-8 -*-
from rest_framework import {{model.rest_imports}}

from {{module_label}}.models import {{model.name}}
{{#if model.serializer}}
from {{module_label}}.serializers.{{model.file_stem}} import {{model.name}}Serializer
{{else}}


class {{model.name}}Serializer(serializers.ModelSerializer):

    class Meta:
        model = {{model.name}}
        fields = '__all__'
{{/if}}


{{#if model.full_crud}}
class {{model.name}}ViewSet(viewsets.ModelViewSet):
{{else}}
class {{model.name}}ViewSet({{#each model.mixins}}{{this}}, {{/each}}viewsets.GenericViewSet):
{{/if}}
    """{{model.title}} endpoint ({{project_name}} API {{api_version}})."""

    queryset = {{model.name}}.objects.all()
    serializer_class = {{model.name}}Serializer
"#;

/// Route table for every scaffolded model of a module
pub const ROUTES_TEMPLATE: &str = r#"# -*- coding: utf-8 -*-
from rest_framework import routers

{{#each models}}
from {{import_path}} import {{name}}ViewSet
{{/each}}

router = routers.DefaultRouter()
{{#each models}}
router.register(r'{{url_prefix}}', {{name}}ViewSet)
{{/each}}

urlpatterns = router.urls
"#;
